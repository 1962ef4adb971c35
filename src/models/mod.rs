mod billing_type;
mod date;
mod expense;
mod period;

pub use billing_type::BillingType;
pub use date::CalendarDate;
pub use expense::ExpenseRow;
pub use period::Period;
