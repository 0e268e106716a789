//! Notification email bodies. The template structs hold ready-to-print
//! strings (placeholders substituted up front) so the askama templates
//! stay free of Option handling.

use askama::Template;

use crate::db::models::{NewContactMessage, NewIntakeForm};

const NOT_SPECIFIED: &str = "Not specified";

#[derive(Template)]
#[template(path = "email/intake_notification.html")]
pub struct IntakeNotification {
    pub client_name: String,
    pub email: String,
    pub phone: String,
    pub client_type: String,
    pub service_location: String,
    pub address: String,
    pub service_requested: String,
    pub hair_length: String,
    pub desired_style: String,
    pub style_notes: String,
    pub hair_type: String,
    pub sensory_needs: Vec<&'static str>,
    pub other_sensory_needs: String,
    pub mobility_needs: Vec<&'static str>,
    pub behaviour_notes: String,
    pub additional_notes: String,
    pub business_name: String,
}

impl IntakeNotification {
    pub fn from_form(form: &NewIntakeForm, business_name: &str) -> Self {
        let mut sensory_needs = Vec::new();
        if form.sensitive_to_noise {
            sensory_needs.push("Sensitive to loud noise");
        }
        if form.sensitive_to_touch {
            sensory_needs.push("Sensitive to touch");
        }
        if form.does_not_like_water {
            sensory_needs.push("Does not like water");
        }
        if form.nervous_anxious {
            sensory_needs.push("Nervous/anxious during appointments");
        }
        if form.enjoys_fidget_toys {
            sensory_needs.push("Enjoys fidget toys");
        }
        if form.needs_weighted_cape {
            sensory_needs.push("Would benefit from weighted cape");
        }
        if form.requires_quiet_environment {
            sensory_needs.push("Requires quiet/low-sensory environment");
        }

        let mut mobility_needs = Vec::new();
        if form.uses_wheelchair {
            mobility_needs.push("Uses wheelchair");
        }
        if form.limited_mobility {
            mobility_needs.push("Limited mobility");
        }
        if form.has_behaviours {
            mobility_needs.push("May have behaviours (see notes)");
        }

        Self {
            client_name: form.client_name.clone(),
            email: form.email.clone(),
            phone: or_default(&form.phone, "Not provided"),
            client_type: form.client_type.clone(),
            service_location: form.service_location.clone(),
            address: or_default(&form.address, "N/A (In-salon)"),
            service_requested: or_default(&form.service_requested, NOT_SPECIFIED),
            hair_length: or_default(&form.hair_length, NOT_SPECIFIED),
            desired_style: or_default(&form.desired_style, NOT_SPECIFIED),
            style_notes: or_default(&form.desired_style_other, ""),
            hair_type: or_default(&form.hair_type, NOT_SPECIFIED),
            sensory_needs,
            other_sensory_needs: or_default(&form.other_sensory_needs, ""),
            mobility_needs,
            behaviour_notes: or_default(&form.behaviour_notes, ""),
            additional_notes: or_default(&form.additional_notes, ""),
            business_name: business_name.to_string(),
        }
    }

    pub fn subject(&self) -> String {
        format!("New Intake Form: {}", self.client_name)
    }

    pub fn text_body(&self) -> String {
        let mut body = String::new();
        body.push_str("New Intake Form Submitted\n\n");

        body.push_str("CLIENT INFORMATION\n");
        body.push_str(&format!("Name: {}\n", self.client_name));
        body.push_str(&format!("Email: {}\n", self.email));
        body.push_str(&format!("Phone: {}\n", self.phone));
        body.push_str(&format!("Client Type: {}\n\n", self.client_type));

        body.push_str("SERVICE DETAILS\n");
        body.push_str(&format!("Location: {}\n", self.service_location));
        body.push_str(&format!("Address: {}\n", self.address));
        body.push_str(&format!("Service Requested: {}\n\n", self.service_requested));

        body.push_str("HAIR DETAILS\n");
        body.push_str(&format!("Current Length: {}\n", self.hair_length));
        body.push_str(&format!("Desired Style: {}\n", self.desired_style));
        if !self.style_notes.is_empty() {
            body.push_str(&format!("Style Notes: {}\n", self.style_notes));
        }
        body.push_str(&format!("Hair Type: {}\n\n", self.hair_type));

        body.push_str("SENSORY & SUPPORT NEEDS\n");
        if self.sensory_needs.is_empty() {
            body.push_str("None selected\n");
        } else {
            for need in &self.sensory_needs {
                body.push_str(&format!("- {need}\n"));
            }
        }
        if !self.other_sensory_needs.is_empty() {
            body.push_str(&format!("Other Notes: {}\n", self.other_sensory_needs));
        }
        body.push('\n');

        body.push_str("MOBILITY & SAFETY\n");
        if self.mobility_needs.is_empty() {
            body.push_str("None selected\n");
        } else {
            for need in &self.mobility_needs {
                body.push_str(&format!("- {need}\n"));
            }
        }
        if !self.behaviour_notes.is_empty() {
            body.push_str(&format!("Behaviour Notes: {}\n", self.behaviour_notes));
        }
        body.push('\n');

        if !self.additional_notes.is_empty() {
            body.push_str(&format!("ADDITIONAL NOTES\n{}\n\n", self.additional_notes));
        }

        body.push_str(&format!(
            "---\nThis form was submitted through the {} website.\n",
            self.business_name
        ));
        body
    }
}

#[derive(Template)]
#[template(path = "email/contact_notification.html")]
pub struct ContactNotification {
    pub name: String,
    pub email: String,
    pub subject_line: String,
    pub message: String,
    pub business_name: String,
}

impl ContactNotification {
    pub fn from_message(message: &NewContactMessage, business_name: &str) -> Self {
        Self {
            name: message.name.clone(),
            email: message.email.clone(),
            subject_line: or_default(&message.subject, "(no subject)"),
            message: message.message.clone(),
            business_name: business_name.to_string(),
        }
    }

    pub fn subject(&self) -> String {
        format!("New Contact Message: {}", self.name)
    }

    pub fn text_body(&self) -> String {
        format!(
            "New Contact Message\n\nName: {}\nEmail: {}\nSubject: {}\n\n{}\n\n---\nThis message was submitted through the {} website.\n",
            self.name, self.email, self.subject_line, self.message, self.business_name
        )
    }
}

fn or_default(value: &Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.clone(),
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_form() -> NewIntakeForm {
        NewIntakeForm {
            client_name: "Sam Rivera".to_string(),
            email: "sam@example.com".to_string(),
            phone: None,
            client_type: "adult".to_string(),
            service_location: "in-salon".to_string(),
            address: None,
            service_requested: None,
            hair_length: None,
            desired_style: None,
            desired_style_other: None,
            hair_type: None,
            sensitive_to_noise: false,
            sensitive_to_touch: false,
            does_not_like_water: false,
            nervous_anxious: false,
            enjoys_fidget_toys: false,
            needs_weighted_cape: false,
            requires_quiet_environment: false,
            other_sensory_needs: None,
            uses_wheelchair: false,
            limited_mobility: false,
            has_behaviours: false,
            behaviour_notes: None,
            additional_notes: None,
        }
    }

    #[test]
    fn intake_text_body_covers_empty_checkbox_groups() {
        let notification = IntakeNotification::from_form(&minimal_form(), "InJoy Beauty");
        let text = notification.text_body();
        assert!(text.contains("Name: Sam Rivera"));
        assert!(text.contains("Phone: Not provided"));
        assert!(text.contains("None selected"));
        assert!(!text.contains("ADDITIONAL NOTES"));
    }

    #[test]
    fn intake_html_renders_selected_needs() {
        let mut form = minimal_form();
        form.sensitive_to_noise = true;
        form.uses_wheelchair = true;
        form.additional_notes = Some("Prefers afternoon appointments".to_string());

        let notification = IntakeNotification::from_form(&form, "InJoy Beauty");
        let html = askama::Template::render(&notification).unwrap();
        assert!(html.contains("Sensitive to loud noise"));
        assert!(html.contains("Uses wheelchair"));
        assert!(html.contains("Prefers afternoon appointments"));
    }

    #[test]
    fn intake_html_escapes_markup_in_user_input() {
        let mut form = minimal_form();
        form.client_name = "<script>alert(1)</script>".to_string();
        let notification = IntakeNotification::from_form(&form, "InJoy Beauty");
        let html = askama::Template::render(&notification).unwrap();
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn contact_notification_defaults_the_subject() {
        let message = NewContactMessage {
            name: "Dana".to_string(),
            email: "dana@example.com".to_string(),
            subject: None,
            message: "Hello!".to_string(),
        };
        let notification = ContactNotification::from_message(&message, "InJoy Beauty");
        assert_eq!(notification.subject(), "New Contact Message: Dana");
        assert!(notification.text_body().contains("Subject: (no subject)"));
    }
}
