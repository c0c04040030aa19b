pub const SITE_NAME: &str = "Feed Panel";
