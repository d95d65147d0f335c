use std::io;

use android_sms_gateway::{Client, RegisterWebHookRequest, WebHookEventType};

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
    let url = required_env("ASG_WEBHOOK_URL")?;

    let client = Client::builder(login, password).build()?;

    let hook = client
        .register_webhook(&RegisterWebHookRequest::new(
            WebHookEventType::SmsReceived,
            url,
        ))
        .await?;
    println!("registered {} for {:?} -> {}", hook.id, hook.event, hook.url);

    for existing in client.get_webhooks().await? {
        println!("  {} {:?} {}", existing.id, existing.event, existing.url);
    }

    if std::env::var("ASG_KEEP_WEBHOOK").is_err() {
        client.delete_webhook(&hook.id).await?;
        println!("deleted {}", hook.id);
    }

    Ok(())
}
