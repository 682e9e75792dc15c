//! Templated email bodies for the contact and booking flows.
//!
//! Content mirrors what the site promises: inquiries are answered within
//! 24 hours on business days, and a booking is pending until a separate
//! confirmation email is sent.

use chrono::{NaiveDate, NaiveTime, Utc};

use crate::models::{BookingSubmission, ContactSubmission};
use crate::services::mail::OutboundEmail;

/// "Monday, March 10, 2025"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// "9:00 AM"
pub fn format_12_hour(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

fn received_at() -> String {
    Utc::now().format("%A, %B %-d, %Y at %-I:%M %p UTC").to_string()
}

pub fn contact_business_email(
    submission: &ContactSubmission,
    business_email: &str,
) -> OutboundEmail {
    let phone_row = submission
        .phone
        .as_deref()
        .filter(|p| !p.trim().is_empty())
        .map(|p| format!("<p><strong>Phone:</strong> {p}</p>"))
        .unwrap_or_default();
    let country_row = submission
        .country
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .map(|c| format!("<p><strong>Interested Country:</strong> {c}</p>"))
        .unwrap_or_default();

    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h1>New Contact Form Submission</h1>
  <h2>Contact Details</h2>
  <p><strong>Name:</strong> {name}</p>
  <p><strong>Email:</strong> {email}</p>
  {phone_row}
  {country_row}
  <p><strong>Subject:</strong> {subject}</p>
  <p><strong>Message:</strong></p>
  <div style="background: #f3f4f6; padding: 15px; border-radius: 10px;">{message}</div>
  <hr>
  <p style="color: #6b7280; font-size: 14px;">This email was sent from your website contact form at {received}.</p>
</div>"#,
        name = submission.name,
        email = submission.email,
        subject = submission.subject,
        message = submission.message.replace('\n', "<br>"),
        received = received_at(),
    );

    OutboundEmail {
        to: business_email.to_string(),
        subject: format!("New Contact Form: {}", submission.subject),
        html,
        reply_to: Some(submission.email.clone()),
    }
}

pub fn contact_auto_reply(submission: &ContactSubmission) -> OutboundEmail {
    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h1>Thank You for Contacting Us!</h1>
  <p>Dear {name},</p>
  <p>Thank you for reaching out to us! We have received your message about
  "<strong>{subject}</strong>" and appreciate your interest in studying abroad.</p>
  <h3>What happens next?</h3>
  <ul>
    <li>Our expert counselors will review your inquiry</li>
    <li>We'll respond within 24 hours during business days</li>
    <li>You'll receive personalized guidance for your study abroad goals</li>
  </ul>
  <p>In the meantime, feel free to explore our website for more information
  about study destinations and university options.</p>
  <hr>
  <p style="color: #6b7280; font-size: 14px;">Office Hours: Mon-Fri 9AM-6PM, Sat 10AM-4PM</p>
</div>"#,
        name = submission.name,
        subject = submission.subject,
    );

    OutboundEmail {
        to: submission.email.clone(),
        subject: format!("Thank you for contacting us - {}", submission.subject),
        html,
        reply_to: None,
    }
}

pub fn booking_business_email(
    submission: &BookingSubmission,
    formatted_date: &str,
    formatted_time: &str,
    business_email: &str,
) -> OutboundEmail {
    let message_block = submission
        .message
        .as_deref()
        .filter(|m| !m.trim().is_empty())
        .map(|m| format!("<h2>Additional Message</h2><div style=\"background: #f3f4f6; padding: 15px; border-radius: 10px;\">{m}</div>"))
        .unwrap_or_default();

    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h1>🎓 New Consultation Booking</h1>
  <h2>Student Details</h2>
  <p><strong>Full Name:</strong> {full_name}</p>
  <p><strong>Email:</strong> {email}</p>
  <p><strong>Phone:</strong> {phone}</p>
  <p><strong>Consultation Type:</strong> {consultation_type}</p>
  <h2>📅 Appointment Details</h2>
  <p><strong>Date:</strong> {date}</p>
  <p><strong>Time:</strong> {time}</p>
  {message_block}
  <hr>
  <p style="color: #6b7280; font-size: 14px;">📧 Booking received on {received}</p>
</div>"#,
        full_name = submission.full_name,
        email = submission.email,
        phone = submission.phone,
        consultation_type = submission.consultation_label(),
        date = formatted_date,
        time = formatted_time,
        received = received_at(),
    );

    OutboundEmail {
        to: business_email.to_string(),
        subject: format!("🎓 New Consultation Booking - {}", submission.full_name),
        html,
        reply_to: Some(submission.email.clone()),
    }
}

pub fn booking_confirmation_email(
    submission: &BookingSubmission,
    formatted_date: &str,
    formatted_time: &str,
) -> OutboundEmail {
    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h1>🎉 Consultation Request Received!</h1>
  <p>Hi {full_name}!</p>
  <p>Thank you for requesting a consultation with us. We're excited to help you
  achieve your study abroad dreams! Your consultation request has been received for:</p>
  <p style="text-align: center;"><strong>📅 {date}</strong><br><strong>⏰ {time}</strong></p>
  <h3>⏳ Next Steps - Please Wait for Confirmation</h3>
  <p><strong>Important:</strong> Your consultation is not yet confirmed. We will
  review your request and send you a confirmation email with the meeting link
  within 24 hours. Please wait for our confirmation before considering your
  appointment scheduled.</p>
  <h3>📋 What to Expect Once Confirmed:</h3>
  <ul>
    <li>Personalized guidance on study destinations</li>
    <li>University selection and application process</li>
    <li>Scholarship opportunities and financial planning</li>
    <li>Visa requirements and documentation</li>
  </ul>
  <h3>📝 Preparation Tips:</h3>
  <ul>
    <li>Have your academic transcripts ready</li>
    <li>Think about your preferred study destinations</li>
    <li>Prepare questions about courses and universities</li>
  </ul>
  <hr>
  <p style="color: #6b7280; font-size: 14px;">We look forward to helping you with
  your study abroad journey! 🌍✈️<br>
  <strong>Please wait for our confirmation email before your consultation is
  officially scheduled.</strong></p>
</div>"#,
        full_name = submission.full_name,
        date = formatted_date,
        time = formatted_time,
    );

    OutboundEmail {
        to: submission.email.clone(),
        subject: "🎉 Your Study Abroad Consultation is Confirmed!".to_string(),
        html,
        reply_to: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_date_renders_weekday_month_day_year() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        assert_eq!(format_long_date(date), "Monday, March 10, 2025");
    }

    #[test]
    fn twelve_hour_clock_drops_leading_zero() {
        let morning = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        assert_eq!(format_12_hour(morning), "9:00 AM");

        let afternoon = NaiveTime::from_hms_opt(16, 30, 0).unwrap();
        assert_eq!(format_12_hour(afternoon), "4:30 PM");
    }

    #[test]
    fn confirmation_email_states_booking_is_pending() {
        let submission = BookingSubmission {
            full_name: "Test Student".into(),
            email: "student@example.com".into(),
            phone: "+12166241878".into(),
            selected_date: "2025-03-10".into(),
            selected_time: "09:00".into(),
            consultation_type: None,
            message: None,
        };
        let email =
            booking_confirmation_email(&submission, "Monday, March 10, 2025", "9:00 AM");
        assert_eq!(email.to, "student@example.com");
        assert!(email.html.contains("not yet confirmed"));
        assert!(email.html.contains("within 24 hours"));
        assert!(email.html.contains("Monday, March 10, 2025"));
        assert!(email.html.contains("9:00 AM"));
    }

    #[test]
    fn contact_business_email_sets_reply_to() {
        let submission = ContactSubmission {
            name: "Jane".into(),
            email: "jane@example.com".into(),
            phone: None,
            subject: "Visa question".into(),
            message: "First line\nSecond line".into(),
            country: Some("Canada".into()),
        };
        let email = contact_business_email(&submission, "team@example.com");
        assert_eq!(email.to, "team@example.com");
        assert_eq!(email.reply_to.as_deref(), Some("jane@example.com"));
        assert!(email.subject.contains("Visa question"));
        assert!(email.html.contains("First line<br>Second line"));
        assert!(email.html.contains("Canada"));
        assert!(!email.html.contains("<strong>Phone:</strong>"));
    }
}
