use std::io;

use android_sms_gateway::{Client, Message};

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let login = required_env("ASG_LOGIN")?;
    let password = required_env("ASG_PASSWORD")?;
    let phone = required_env("ASG_PHONE")?;
    let text = std::env::var("ASG_MESSAGE")
        .unwrap_or_else(|_| "Hello from the android-sms-gateway demo.".to_owned());

    let mut builder = Client::builder(login, password);
    if let Ok(base_url) = std::env::var("ASG_BASE_URL") {
        builder = builder.base_url(base_url);
    }
    let client = builder.build()?;

    let state = client.send(&Message::new(text, vec![phone])).await?;
    println!("id: {}, state: {:?}", state.id, state.state);
    for recipient in &state.recipients {
        println!("  {}: {:?}", recipient.phone_number, recipient.state);
    }

    Ok(())
}
