use std::env;

use juiceworks_core::models::guild::GuildConfig;
use juiceworks_discord_bot::config::BotConfig;

// Environment variables are process-wide, so every case runs in this one test.
#[test]
fn test_from_env() {
    unsafe {
        env::remove_var("DISCORD_TOKEN");
        env::remove_var("DISCORD_APPLICATION_ID");
    }
    let err = BotConfig::from_env().unwrap_err();
    assert!(err.to_string().contains("DISCORD_TOKEN"));

    unsafe { env::set_var("DISCORD_TOKEN", "   ") };
    assert!(BotConfig::from_env().is_err());

    unsafe { env::set_var("DISCORD_TOKEN", "test_token") };
    let config = BotConfig::from_env().unwrap();
    assert_eq!(config.token, "test_token");
    assert_eq!(config.application_id, None);
    assert_eq!(config.guild, GuildConfig::juiceworks());

    unsafe { env::set_var("DISCORD_APPLICATION_ID", "12345") };
    assert_eq!(BotConfig::from_env().unwrap().application_id, Some(12345));

    unsafe { env::set_var("DISCORD_APPLICATION_ID", "not-a-number") };
    assert!(BotConfig::from_env().is_err());
}
