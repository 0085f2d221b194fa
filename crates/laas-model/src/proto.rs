use seoul_eats_model::{ErrorKind, Message as ModelMessage, ModelRequest, Role};
use serde::{Deserialize, Serialize};

use crate::{Error, LaasConfig};

// ------------------------------
// Types received from the server
// ------------------------------

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct ChoiceMessage {
    pub content: String,
}

// ------------------------
// Types sent to the server
// ------------------------

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Message {
    User { content: String },
    Assistant { content: String },
}

/// Preset parameters. The prompt preset carries its own, so this is
/// always sent as an empty object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Params {}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ChatCompletionRequest {
    hash: String,
    params: Params,
    messages: Vec<Message>,
}

// -----------
// Conversions
// -----------

#[inline]
pub fn create_request(
    req: &ModelRequest,
    config: &LaasConfig,
) -> ChatCompletionRequest {
    ChatCompletionRequest {
        hash: config.hash.clone(),
        params: Params::default(),
        messages: req.messages.iter().map(create_message).collect(),
    }
}

#[inline]
fn create_message(msg: &ModelMessage) -> Message {
    let content = msg.content.clone();
    match msg.role {
        Role::User => Message::User { content },
        Role::Assistant => Message::Assistant { content },
    }
}

/// Pulls the first choice's content out of a response body.
pub fn parse_answer(body: &str) -> Result<String, Error> {
    let resp = serde_json::from_str::<ChatCompletionResponse>(body)
        .map_err(|err| Error::new(format!("{err}"), ErrorKind::MalformedBody))?;
    let Some(choice) = resp.choices.into_iter().next() else {
        return Err(Error::new(
            "response has no choices",
            ErrorKind::MalformedBody,
        ));
    };
    Ok(choice.message.content)
}

#[cfg(test)]
mod tests {
    use seoul_eats_model::ModelProviderError;
    use serde_json::json;

    use super::*;
    use crate::LaasConfigBuilder;

    #[test]
    fn test_create_request() {
        let request = ModelRequest {
            messages: vec![
                ModelMessage::user("What should I eat today?"),
                ModelMessage::assistant("How about naengmyeon?"),
                ModelMessage::user("It's cold outside."),
            ],
        };
        let config = LaasConfigBuilder::with_api_key("xxx")
            .with_hash("abc123")
            .build();
        let expected = ChatCompletionRequest {
            hash: "abc123".to_owned(),
            params: Params {},
            messages: vec![
                Message::User {
                    content: "What should I eat today?".to_owned(),
                },
                Message::Assistant {
                    content: "How about naengmyeon?".to_owned(),
                },
                Message::User {
                    content: "It's cold outside.".to_owned(),
                },
            ],
        };
        let laas_req = create_request(&request, &config);
        assert_eq!(laas_req, expected);

        assert_eq!(
            serde_json::to_value(&laas_req).unwrap(),
            json!({
                "hash": "abc123",
                "params": {},
                "messages": [
                    { "role": "user", "content": "What should I eat today?" },
                    { "role": "assistant", "content": "How about naengmyeon?" },
                    { "role": "user", "content": "It's cold outside." }
                ]
            })
        );
    }

    #[test]
    fn test_parse_answer() {
        let body = r#"{
            "id": "chatcmpl-1",
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": "Try tteokbokki." } },
                { "index": 1, "message": { "role": "assistant", "content": "Try kimbap." } }
            ]
        }"#;
        assert_eq!(parse_answer(body).unwrap(), "Try tteokbokki.");
    }

    #[test]
    fn test_parse_malformed_answer() {
        for body in [
            "",
            "<html>Bad Gateway</html>",
            r#"{}"#,
            r#"{"choices":[]}"#,
            r#"{"choices":[{"message":{}}]}"#,
            r#"{"choices":[{"message":{"content":null}}]}"#,
            r#"{"choices":[{"message":{"content":42}}]}"#,
        ] {
            let err = parse_answer(body).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedBody, "body: {body}");
        }
    }
}
