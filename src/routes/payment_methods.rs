use axum::{extract::State, Extension, Json};

use crate::{
    error::{AppError, Result},
    models::{
        PaymentMethod, PaymentMethodRequest, PaymentMethodsResponse, PaymentMethodsUpdateResponse,
    },
    queries::{payment_queries, user_queries},
    routes::profile::user_not_found,
    utils::{
        extractors::{extract_user_id, is_blank, JsonBody},
        jwt::Claims,
    },
    AppState,
};

pub async fn add_payment_method(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    JsonBody(payload): JsonBody<PaymentMethodRequest>,
) -> Result<Json<PaymentMethodsUpdateResponse>> {
    let user_id = extract_user_id(&claims)?;
    let method = validate_payment_method(payload)?;

    if !payment_queries::add_payment_method(&state.db, user_id, &method).await? {
        return Err(AppError::Duplicate(
            "Payment method already exists".to_string(),
        ));
    }

    let payment_methods = payment_queries::get_payment_methods(&state.db, user_id).await?;

    Ok(Json(PaymentMethodsUpdateResponse {
        message: "Payment method added successfully".to_string(),
        payment_methods,
    }))
}

pub async fn get_payment_methods(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<PaymentMethodsResponse>> {
    let user_id = extract_user_id(&claims)?;

    if user_queries::find_by_id(&state.db, user_id).await?.is_none() {
        return Err(user_not_found());
    }

    let payment_methods = payment_queries::get_payment_methods(&state.db, user_id).await?;

    Ok(Json(PaymentMethodsResponse { payment_methods }))
}

/// Card numbers are stored exactly as sent, without normalisation.
fn validate_payment_method(payload: PaymentMethodRequest) -> Result<PaymentMethod> {
    match (
        payload.card_number,
        payload.exp_date,
        payload.cvv,
        payload.country,
    ) {
        (Some(card_number), Some(exp_date), Some(cvv), Some(country))
            if [&card_number, &exp_date, &cvv, &country]
                .iter()
                .all(|v| !is_blank(Some(v.as_str()))) =>
        {
            Ok(PaymentMethod {
                card_number,
                exp_date,
                cvv,
                country,
            })
        }
        _ => Err(AppError::Validation(
            "All payment method fields are required".to_string(),
        )),
    }
}
