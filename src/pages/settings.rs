// Settings page — local, page-scoped state with a simulated save.
//
// Nothing here persists: "save" waits out an artificial delay and emits
// a success notification, "reset" restores the defaults. This mirrors
// the intended product behavior, not a missing feature.

use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::notify::{Notification, NotificationSink, Severity};

/// The dashboard's configurable preferences. Held in memory for the
/// session only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsState {
    // Monitoring
    pub real_time_monitoring: bool,
    pub alert_threshold: String,
    pub auto_classification: bool,
    // Notifications
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub alert_sounds: bool,
    // Data
    pub data_retention_days: String,
    pub export_format: String,
    pub backup_frequency: String,
    // Security
    pub api_key: String,
    pub encrypt_data: bool,
    pub audit_logs: bool,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            real_time_monitoring: true,
            alert_threshold: "medium".to_string(),
            auto_classification: true,
            email_notifications: true,
            push_notifications: true,
            alert_sounds: false,
            data_retention_days: "90".to_string(),
            export_format: "json".to_string(),
            backup_frequency: "daily".to_string(),
            api_key: "****-****-****-****".to_string(),
            encrypt_data: true,
            audit_logs: true,
        }
    }
}

impl SettingsState {
    /// Simulate persisting the settings: wait out the artificial delay,
    /// then acknowledge. Never writes anywhere.
    pub async fn save(&self, delay: Duration, sink: &dyn NotificationSink) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("  {spinner} {msg}")
                .expect("static spinner template is valid"),
        );
        spinner.set_message("Saving...");
        spinner.enable_steady_tick(Duration::from_millis(80));

        tokio::time::sleep(delay).await;

        spinner.finish_and_clear();
        sink.notify(Notification::new(
            Severity::Success,
            "Settings saved",
            "Settings saved successfully!",
        ));
    }

    /// Restore defaults and acknowledge.
    pub fn reset(&mut self, sink: &dyn NotificationSink) {
        *self = SettingsState::default();
        sink.notify(Notification::new(
            Severity::Success,
            "Settings reset",
            "Settings reset to defaults",
        ));
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

pub fn render(settings: &SettingsState) {
    println!("\n{}", "=== System Settings ===".bold());
    println!("  Configure monitoring, alerts, and system preferences\n");

    println!("{}", "Monitoring Configuration".bold());
    println!(
        "  Real-time monitoring   {}",
        on_off(settings.real_time_monitoring)
    );
    println!("  Alert sensitivity      {}", settings.alert_threshold);
    println!(
        "  Auto classification    {}",
        on_off(settings.auto_classification)
    );

    println!("\n{}", "Notification Preferences".bold());
    println!(
        "  Email notifications    {}",
        on_off(settings.email_notifications)
    );
    println!(
        "  Push notifications     {}",
        on_off(settings.push_notifications)
    );
    println!("  Alert sounds           {}", on_off(settings.alert_sounds));

    println!("\n{}", "Data Management".bold());
    println!(
        "  Retention period       {} days",
        settings.data_retention_days
    );
    println!("  Export format          {}", settings.export_format);
    println!("  Backup frequency       {}", settings.backup_frequency);

    println!("\n{}", "Security Configuration".bold());
    println!("  API access key         {}", settings.api_key.dimmed());
    println!("  Data encryption        {}", on_off(settings.encrypt_data));
    println!("  Audit logging          {}", on_off(settings.audit_logs));

    println!(
        "\n  {}",
        "Settings are session-scoped; `save` simulates persistence.".dimmed()
    );
}
