// SPDX-License-Identifier: MPL-2.0
//! JSON contract of the recognition endpoint.
//!
//! Request: `{"image": "<base64 JPEG>"}`.
//! Response: `{"food_name": "...", "nutrition_info": [{"name": "...", "value": ...}]}`
//! where `value` is a string or a number.

use super::error::NoDataReason;
use crate::domain::recognition::{
    IncompleteResult, NutrientValue, NutritionEntry, RecognitionRequest, RecognitionResult,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct WireRequest<'a> {
    image: &'a str,
}

#[derive(Deserialize)]
struct WireResponse {
    #[serde(default)]
    food_name: Option<String>,
    #[serde(default)]
    nutrition_info: Option<Vec<WireNutrient>>,
}

#[derive(Deserialize)]
struct WireNutrient {
    name: String,
    value: WireValue,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireValue {
    Number(f64),
    Text(String),
}

impl From<WireValue> for NutrientValue {
    fn from(value: WireValue) -> Self {
        match value {
            WireValue::Number(n) => NutrientValue::Number(n),
            WireValue::Text(s) => NutrientValue::Text(s),
        }
    }
}

/// Serializes the request body.
///
/// # Errors
///
/// Returns the serializer error; a string field cannot fail in practice.
pub fn request_body(request: &RecognitionRequest) -> serde_json::Result<Vec<u8>> {
    serde_json::to_vec(&WireRequest {
        image: request.image_base64(),
    })
}

/// Maps a completed exchange to a result.
///
/// A result is produced only for a 2xx status with a non-blank `food_name`
/// and a non-empty `nutrition_info`; anything else is a [`NoDataReason`].
///
/// # Errors
///
/// Returns the first reason the response does not satisfy the contract.
pub fn interpret(status: u16, body: &[u8]) -> Result<RecognitionResult, NoDataReason> {
    if !(200..300).contains(&status) {
        return Err(NoDataReason::UnexpectedStatus(status));
    }
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(NoDataReason::EmptyBody);
    }

    let wire: WireResponse = serde_json::from_slice(body)
        .map_err(|err| NoDataReason::MalformedBody(err.to_string()))?;

    let food_name = wire.food_name.unwrap_or_default();
    let nutrition_info = wire
        .nutrition_info
        .unwrap_or_default()
        .into_iter()
        .map(|n| NutritionEntry::new(n.name, n.value.into()))
        .collect();

    RecognitionResult::new(food_name, nutrition_info).map_err(|missing| match missing {
        IncompleteResult::MissingFoodName => NoDataReason::MissingFoodName,
        IncompleteResult::MissingNutritionInfo => NoDataReason::MissingNutritionInfo,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_payload_yields_exact_result() {
        let body = br#"{"food_name":"Apple","nutrition_info":[{"name":"Calories","value":95}]}"#;
        let result = interpret(200, body).expect("valid payload");
        assert_eq!(result.food_name(), "Apple");
        assert_eq!(
            result.nutrition_info(),
            &[NutritionEntry::new("Calories", NutrientValue::Number(95.0))]
        );
    }

    #[test]
    fn text_values_are_kept_verbatim() {
        let body = br#"{"food_name":"Rice","nutrition_info":[{"name":"Carbs","value":"45 g"}]}"#;
        let result = interpret(200, body).expect("valid payload");
        assert_eq!(
            result.nutrition_info()[0].value,
            NutrientValue::Text("45 g".into())
        );
    }

    #[test]
    fn missing_nutrition_info_is_no_data() {
        let body = br#"{"food_name":"Apple"}"#;
        assert_eq!(interpret(200, body), Err(NoDataReason::MissingNutritionInfo));
    }

    #[test]
    fn empty_nutrition_list_is_no_data() {
        let body = br#"{"food_name":"Apple","nutrition_info":[]}"#;
        assert_eq!(interpret(200, body), Err(NoDataReason::MissingNutritionInfo));
    }

    #[test]
    fn blank_food_name_is_no_data() {
        let body = br#"{"food_name":"","nutrition_info":[{"name":"Calories","value":95}]}"#;
        assert_eq!(interpret(200, body), Err(NoDataReason::MissingFoodName));
    }

    #[test]
    fn empty_body_is_no_data() {
        assert_eq!(interpret(200, b""), Err(NoDataReason::EmptyBody));
        assert_eq!(interpret(200, b"  \n"), Err(NoDataReason::EmptyBody));
    }

    #[test]
    fn non_json_body_is_no_data() {
        let outcome = interpret(200, b"<html>tunnel warning</html>");
        assert!(matches!(outcome, Err(NoDataReason::MalformedBody(_))));
    }

    #[test]
    fn non_success_status_is_no_data_even_with_valid_body() {
        let body = br#"{"food_name":"Apple","nutrition_info":[{"name":"Calories","value":95}]}"#;
        assert_eq!(interpret(500, body), Err(NoDataReason::UnexpectedStatus(500)));
    }

    #[test]
    fn request_body_wraps_image_field() {
        let request = RecognitionRequest::new("QUJD".into());
        let body = request_body(&request).expect("serializable");
        let value: serde_json::Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(value, serde_json::json!({ "image": "QUJD" }));
    }
}
