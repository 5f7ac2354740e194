use serde::Serialize;

/// One named input of the contact form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    FullName,
    Email,
    Subject,
    Comment,
    Phone,
}

impl Field {
    /// All fields in display and validation order
    pub const ALL: [Field; 5] = [
        Field::FullName,
        Field::Email,
        Field::Subject,
        Field::Comment,
        Field::Phone,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::FullName => "Full Name",
            Field::Email => "Email address",
            Field::Subject => "Subject",
            Field::Comment => "Comment",
            Field::Phone => "Phone number",
        }
    }

    /// Phone is the only optional field
    pub fn is_mandatory(&self) -> bool {
        !matches!(self, Field::Phone)
    }

    pub fn next(&self) -> Field {
        match self {
            Field::FullName => Field::Email,
            Field::Email => Field::Subject,
            Field::Subject => Field::Comment,
            Field::Comment => Field::Phone,
            Field::Phone => Field::FullName,
        }
    }

    pub fn prev(&self) -> Field {
        match self {
            Field::FullName => Field::Phone,
            Field::Email => Field::FullName,
            Field::Subject => Field::Email,
            Field::Comment => Field::Subject,
            Field::Phone => Field::Comment,
        }
    }
}

/// Current values of the five contact form inputs
#[derive(Clone, Debug, Default)]
pub struct FormFields {
    pub full_name: String,
    pub email: String,
    pub subject: String,
    pub comment: String,
    pub phone: String,
}

impl FormFields {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Comment => &self.comment,
            Field::Phone => &self.phone,
        }
    }

    pub fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FullName => &mut self.full_name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Comment => &mut self.comment,
            Field::Phone => &mut self.phone,
        }
    }

    /// Build the wire payload from the current values (phone may be empty)
    pub fn to_request(&self) -> ContactRequest {
        ContactRequest {
            email: self.email.clone(),
            full_name: self.full_name.clone(),
            phone: self.phone.clone(),
            subject: self.subject.clone(),
            comment: self.comment.clone(),
        }
    }
}

/// Per-field validation messages; `None` means the field currently has no error
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub comment: Option<String>,
    pub phone: Option<String>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::FullName => self.full_name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Subject => self.subject.as_deref(),
            Field::Comment => self.comment.as_deref(),
            Field::Phone => self.phone.as_deref(),
        }
    }

    pub fn set(&mut self, field: Field, message: Option<String>) {
        match field {
            Field::FullName => self.full_name = message,
            Field::Email => self.email = message,
            Field::Subject => self.subject = message,
            Field::Comment => self.comment = message,
            Field::Phone => self.phone = message,
        }
    }

    pub fn clear(&mut self, field: Field) {
        self.set(field, None);
    }

    /// True iff no field has an error message
    pub fn is_clear(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_none())
    }
}

/// Outcome state of the last submission attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Success,
    Error,
}

/// JSON body POSTed to the contact endpoint
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub email: String,
    pub full_name: String,
    pub phone: String,
    pub subject: String,
    pub comment: String,
}

/// Kind of activity log entry
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ActivityKind {
    Info,
    Success,
    Error,
}

/// A timestamped line in the activity log panel
#[derive(Clone, Debug)]
pub struct ActivityEntry {
    pub kind: ActivityKind,
    pub message: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl ActivityEntry {
    pub fn new(kind: ActivityKind, message: impl Into<String>) -> Self {
        ActivityEntry {
            kind,
            message: message.into(),
            timestamp: chrono::Utc::now(),
        }
    }
}
