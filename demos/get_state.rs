use std::io;
use std::time::Duration;

use android_sms_gateway::Client;

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
    let message_id = required_env("ASG_MESSAGE_ID")?;

    let client = Client::builder(login, password)
        .timeout(Duration::from_secs(30))
        .build()?;

    // Polling cadence is up to the caller; one lookup is enough for the demo.
    let state = client.get_state(&message_id).await?;
    println!(
        "id: {}, state: {:?}, terminal: {}",
        state.id,
        state.state,
        state.state.is_terminal()
    );
    for recipient in &state.recipients {
        match recipient.error.as_deref() {
            Some(error) => println!("  {}: {:?} ({error})", recipient.phone_number, recipient.state),
            None => println!("  {}: {:?}", recipient.phone_number, recipient.state),
        }
    }

    Ok(())
}
