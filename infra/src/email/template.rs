//! Verification email rendering

use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Europe::London;

use hrm_core::domain::value_objects::VerificationNotice;

use super::email_service::EmailMessage;

pub const VERIFICATION_EMAIL_SUBJECT: &str = "Welcome to PlusPay by Plus Equals To";

const VERIFICATION_EMAIL_HTML: &str = include_str!("../../templates/verification_email.html");

/// Render the signup verification email for `notice`
///
/// Times are shown in UK local time, e.g. "19 October at 3:04 pm BST".
pub fn render_verification_email(notice: &VerificationNotice, now: DateTime<Utc>) -> EmailMessage {
    let local = now.with_timezone(&London);
    let current_date_time = local.format("%-d %B at %-I:%M %P %Z").to_string();
    let current_year = local.year().to_string();

    let html_body = VERIFICATION_EMAIL_HTML
        .replace("{{firstName}}", &escape_html(&notice.recipient_name))
        .replace("{{verificationLink}}", &escape_html(&notice.verification_link))
        .replace("{{location}}", &escape_html(&notice.origin))
        .replace("{{currentDateTime}}", &current_date_time)
        .replace("{{currentYear}}", &current_year);

    let text_body = format!(
        "Hi {},\n\n\
         Please confirm your email address by opening the link below:\n\n\
         {}\n\n\
         Signup request from {} on {}.\n\
         If this wasn't you, you can ignore this email.",
        notice.recipient_name, notice.verification_link, notice.origin, current_date_time
    );

    EmailMessage {
        to_email: notice.recipient_email.clone(),
        to_name: Some(notice.recipient_name.clone()),
        subject: VERIFICATION_EMAIL_SUBJECT.to_string(),
        html_body,
        text_body: Some(text_body),
    }
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
