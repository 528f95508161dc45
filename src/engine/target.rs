use chrono::{Datelike, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::model::User;

/// Expected hours per weekday. The organizational half-day-Friday policy is
/// just one instance of this table; swapping policies means building a
/// different table, not touching the calendar math.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeekdayRates {
    /// Indexed by days from Monday.
    hours: [f64; 7],
}

impl WeekdayRates {
    pub fn uniform(hours: f64) -> Self {
        Self { hours: [hours; 7] }
    }

    pub fn with_rate(mut self, weekday: Weekday, hours: f64) -> Self {
        self.hours[weekday.num_days_from_monday() as usize] = hours;
        self
    }

    /// The user's policy: every day at the daily rate, Friday at the Friday
    /// rate (defaulting to the daily rate).
    pub fn for_user(user: &User) -> Self {
        Self::uniform(user.daily_target_hours).with_rate(Weekday::Fri, user.friday_rate())
    }

    pub fn rate(&self, weekday: Weekday) -> f64 {
        self.hours[weekday.num_days_from_monday() as usize]
    }
}

fn month_bounds(any_date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = any_date.with_day(1).unwrap();
    let next_first = first + Months::new(1);
    (first, next_first)
}

/// Sums the rate table over every calendar day of the month containing
/// `any_date_in_month`.
pub fn target_for_month(rates: &WeekdayRates, any_date_in_month: NaiveDate) -> f64 {
    let (first, next_first) = month_bounds(any_date_in_month);
    first
        .iter_days()
        .take_while(|day| *day < next_first)
        .map(|day| rates.rate(day.weekday()))
        .sum()
}

/// Expected hours for the user over the month containing `any_date_in_month`.
/// Rejects a non-positive (or non-finite) daily target up front; downstream
/// salary math divides by this result.
pub fn monthly_target(user: &User, any_date_in_month: NaiveDate) -> Result<f64, ConfigurationError> {
    if !(user.daily_target_hours > 0.0) || !user.daily_target_hours.is_finite() {
        return Err(ConfigurationError::NonPositiveTargetHours(
            user.daily_target_hours,
        ));
    }
    Ok(target_for_month(&WeekdayRates::for_user(user), any_date_in_month))
}
