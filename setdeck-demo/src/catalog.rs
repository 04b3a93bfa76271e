//! Settings schemas shipped with the demo.
//!
//! - `notifications` - standalone schema
//! - `database` - group of connection, performance and backup settings
//! - `api` - group of authentication and rate limiting settings

use setdeck::{Field, Schema, SchemaGroup};

/// Notification preferences.
pub fn notifications() -> Schema {
    Schema::new("notifications", "Notification Settings")
        .menu_title("Notifications")
        .description("Configure application notifications")
        .field(
            Field::boolean("email_enabled", "Email Notifications", true)
                .description("Receive notifications via email"),
        )
        .field(
            Field::string("email_address", "Email Address", "user@example.com")
                .description("Email address for notifications"),
        )
        .field(
            Field::enumeration(
                "notification_frequency",
                "Notification Frequency",
                [
                    ("realtime", "Real-time"),
                    ("hourly", "Every Hour"),
                    ("daily", "Daily Digest"),
                    ("weekly", "Weekly Summary"),
                ],
                "daily",
            )
            .description("How often to send notifications"),
        )
}

/// Database connection, performance and backup settings, expanded by default.
pub fn database_group() -> SchemaGroup {
    SchemaGroup::new("database", "Database Settings")
        .description("Database connection, performance, and backup settings")
        .default_open(true)
        .schema(
            Schema::new("connection", "Connection Settings")
                .menu_title("Connection")
                .description("Database connection configuration")
                .field(
                    Field::string("db_host", "Host", "localhost")
                        .description("Database server hostname"),
                )
                .field(
                    Field::integer("db_port", "Port", 5432)
                        .range(1, 65535)
                        .description("Database server port"),
                )
                .field(Field::string("db_name", "Database Name", "myapp")),
        )
        .schema(
            Schema::new("performance", "Performance Settings")
                .menu_title("Performance")
                .description("Database performance tuning")
                .field(
                    Field::integer("pool_size", "Connection Pool Size", 10)
                        .range(1, 100)
                        .description("Maximum number of database connections"),
                )
                .field(Field::number("query_timeout", "Query Timeout (seconds)", 30.0).minimum(1.0))
                .field(Field::boolean("enable_caching", "Enable Query Caching", true)),
        )
        .schema(
            Schema::new("backup", "Backup Settings")
                .menu_title("Backup")
                .description("Automated backup configuration")
                .field(Field::boolean("auto_backup", "Enable Auto Backup", false))
                .field(Field::enumeration(
                    "backup_schedule",
                    "Backup Schedule",
                    [
                        ("hourly", "Every Hour"),
                        ("daily", "Daily"),
                        ("weekly", "Weekly"),
                        ("monthly", "Monthly"),
                    ],
                    "daily",
                ))
                .field(Field::integer("retention_days", "Retention Period (days)", 30).range(1, 365)),
        )
}

/// API authentication and rate limiting, collapsed by default.
pub fn api_group() -> SchemaGroup {
    SchemaGroup::new("api", "API Settings")
        .description("API authentication and rate limiting")
        .default_open(false)
        .schema(
            Schema::new("authentication", "API Authentication")
                .menu_title("Authentication")
                .field(
                    Field::string("api_key", "API Key", "")
                        .description("Your API key for external services"),
                )
                .field(Field::boolean("use_oauth", "Use OAuth", false)),
        )
        .schema(
            Schema::new("rate_limiting", "Rate Limiting")
                .menu_title("Rate Limits")
                .field(Field::integer("requests_per_minute", "Requests Per Minute", 60).range(1, 10000))
                .field(
                    Field::integer("burst_size", "Burst Size", 10)
                        .minimum(1)
                        .description("Maximum burst of requests allowed"),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_valid() {
        assert!(notifications().validate().is_ok());
        assert!(database_group().validate().is_ok());
        assert!(api_group().validate().is_ok());
    }

    #[test]
    fn test_group_shapes() {
        let db = database_group();
        assert!(db.default_open);
        assert_eq!(db.len(), 3);
        assert_eq!(
            db.member_ids().collect::<Vec<_>>(),
            ["database_connection", "database_performance", "database_backup"]
        );

        let api = api_group();
        assert!(!api.default_open);
        assert_eq!(api.len(), 2);
        assert_eq!(
            api.get("rate_limiting").map(|s| s.display_title()),
            Some("Rate Limits")
        );
    }
}
