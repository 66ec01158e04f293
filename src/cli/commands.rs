//! CLI command handlers for login, device listing, and notifications.

use std::io::Write;
use std::sync::Arc;

use crate::cloud::{CloudSession, Device, FileTokenStore};
use crate::config::CloudConfig;
use crate::device::{DeviceSession, Frame, Notification, Sound};

use super::NotifyArgs;

/// Handle `lametric login`.
pub async fn handle_login() -> Result<(), Box<dyn std::error::Error>> {
    authenticated_session().await?;
    println!("✅ Logged in to LaMetric Cloud");
    Ok(())
}

/// Handle `lametric devices`.
pub async fn handle_devices() -> Result<(), Box<dyn std::error::Error>> {
    let session = authenticated_session().await?;
    let devices = session.get_devices().await?;
    println!("You have {} device(s):", devices.len());
    for (idx, device) in devices.iter().enumerate() {
        println!(
            " {}  Name: \"{}\", connected to: \"{}\", IP: {}",
            idx + 1,
            device.name,
            device.wifi_ssid,
            device.ipv4_internal
        );
    }
    Ok(())
}

/// Handle `lametric notify`.
pub async fn handle_notify(args: NotifyArgs) -> Result<(), Box<dyn std::error::Error>> {
    let session = authenticated_session().await?;
    let devices = session.get_devices().await?;
    let device = pick_device(&devices, args.device)?;

    let mut notification =
        Notification::new(vec![Frame::with_icon(&args.icon, &args.text)]).with_cycles(args.cycles);
    if let Some(sound) = args.sound {
        notification = notification.with_sound(Sound::notification(sound));
    }

    let device_session = DeviceSession::new(&device.ipv4_internal, &device.api_key);
    device_session.send_notification(&notification).await?;
    println!("✅ Notification sent to \"{}\"", device.name);
    Ok(())
}

/// Restore saved tokens and refresh them, or walk the user through the
/// authorization-code flow; saves the resulting state.
async fn authenticated_session() -> Result<CloudSession, Box<dyn std::error::Error>> {
    let config = CloudConfig::from_env()?;
    let store = Arc::new(FileTokenStore::new_default());
    let mut session = CloudSession::new(config, store);
    session.restore_state()?;

    if session.has_refresh_token() {
        session.refresh_token().await?;
    } else {
        println!("🔗 Visit: {}", session.authentication_url());
        println!("📋 After authorizing, paste the response code below:");
        print!("> ");
        std::io::stdout().flush()?;

        let mut code = String::new();
        std::io::stdin().read_line(&mut code)?;
        let code = code.trim();
        if code.is_empty() {
            eprintln!("❌ No code provided.");
            std::process::exit(1);
        }
        session.authenticate(code).await?;
    }

    session.save_state()?;
    Ok(session)
}

fn pick_device(devices: &[Device], index: usize) -> Result<&Device, Box<dyn std::error::Error>> {
    match index.checked_sub(1).and_then(|i| devices.get(i)) {
        Some(device) => Ok(device),
        None => {
            eprintln!(
                "❌ No device at index {index} ({} available)",
                devices.len()
            );
            std::process::exit(1);
        }
    }
}
