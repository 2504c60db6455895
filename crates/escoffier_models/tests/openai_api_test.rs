use escoffier_core::{GenerateRequest, Message, Role};
use escoffier_interface::CompletionDriver;
use escoffier_models::{ClientConfig, OpenAiClient};
use std::env;

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_openai_simple_generation() {
    let api_key = env::var("OPENAI_API_KEY").expect("OPENAI_API_KEY must be set for API tests");

    let client = OpenAiClient::new(ClientConfig::new(api_key, 0.0));

    let message = Message::new(Role::User, "Say 'test' and nothing else.");

    let request = GenerateRequest::builder()
        .messages(vec![message])
        .build()
        .expect("Valid request");

    let response = client.generate(&request).await.expect("API call succeeded");

    assert!(!response.text().is_empty());
    println!("Response: {:?}", response.text());
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_openai_with_temperature() {
    let api_key = env::var("OPENAI_API_KEY").expect("OPENAI_API_KEY must be set for API tests");

    let client = OpenAiClient::new(ClientConfig::new(api_key, 0.7));

    let message = Message::new(Role::User, "Count to 3.");

    let request = GenerateRequest::builder()
        .messages(vec![message])
        .temperature(Some(0.5))
        .build()
        .expect("Valid request");

    let response = client.generate(&request).await.expect("API call succeeded");

    assert!(!response.text().is_empty());
    println!("Response with temperature: {:?}", response.text());
}
