use super::tags::ReminderType;
use super::{push_some, Entity, EntityKind, ForeignKey};
use crate::validation::{self, required, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Reminder {
    pub id: i32,
    pub user_id: i32,
    pub debt_id: Option<i32>,
    pub loan_given_id: Option<i32>,
    pub subscription_id: Option<i32>,
    #[serde(rename = "type")]
    pub reminder_type: ReminderType,
    pub title: String,
    pub description: Option<String>,
    pub reminder_date: DateTime<Utc>,
    pub is_sent: bool,
}

#[derive(Deserialize, Clone, Default, Debug)]
#[serde(default, deny_unknown_fields)]
pub struct NewReminder {
    pub user_id: Option<i32>,
    pub debt_id: Option<i32>,
    pub loan_given_id: Option<i32>,
    pub subscription_id: Option<i32>,
    #[serde(rename = "type")]
    pub reminder_type: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub reminder_date: Option<DateTime<Utc>>,
    pub is_sent: Option<bool>,
}

impl NewReminder {
    pub fn new(
        user_id: i32,
        reminder_type: &str,
        title: &str,
        reminder_date: DateTime<Utc>,
    ) -> NewReminder {
        NewReminder {
            user_id: Some(user_id),
            reminder_type: Some(reminder_type.to_owned()),
            title: Some(title.to_owned()),
            reminder_date: Some(reminder_date),
            ..NewReminder::default()
        }
    }
}

impl Entity for Reminder {
    type New = NewReminder;

    const KIND: EntityKind = EntityKind::Reminder;

    fn build(new: NewReminder, id: i32, _now: DateTime<Utc>) -> Result<Reminder, ValidationError> {
        let reminder = Reminder {
            id,
            user_id: required("user_id", new.user_id)?,
            debt_id: new.debt_id,
            loan_given_id: new.loan_given_id,
            subscription_id: new.subscription_id,
            reminder_type: ReminderType::from_tag("type", &required("type", new.reminder_type)?)?,
            title: required("title", new.title)?,
            description: new.description,
            reminder_date: required("reminder_date", new.reminder_date)?,
            is_sent: new.is_sent.unwrap_or(false),
        };
        reminder.validate()?;
        Ok(reminder)
    }

    fn id(&self) -> i32 {
        self.id
    }

    fn user_id(&self) -> Option<i32> {
        Some(self.user_id)
    }

    fn foreign_keys(&self) -> Vec<ForeignKey> {
        let mut keys = vec![ForeignKey::User(self.user_id)];
        push_some(&mut keys, self.debt_id, ForeignKey::Debt);
        push_some(&mut keys, self.loan_given_id, ForeignKey::LoanGiven);
        push_some(&mut keys, self.subscription_id, ForeignKey::Subscription);
        keys
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validation::max_len("title", &self.title, 100)?;
        validation::opt_max_len("description", self.description.as_deref(), 255)
    }
}
