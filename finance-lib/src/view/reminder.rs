use crate::view::Render;
use chrono::{DateTime, Utc};
use finance_repo::models::{Reminder, ReminderType};
use serde::Serialize;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ReminderView {
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

impl Render for Reminder {
    type Shallow = ReminderView;

    fn shallow(&self) -> ReminderView {
        ReminderView {
            id: self.id,
            user_id: self.user_id,
            debt_id: self.debt_id,
            loan_given_id: self.loan_given_id,
            subscription_id: self.subscription_id,
            reminder_type: self.reminder_type,
            title: self.title.clone(),
            description: self.description.clone(),
            reminder_date: self.reminder_date,
            is_sent: self.is_sent,
        }
    }
}
