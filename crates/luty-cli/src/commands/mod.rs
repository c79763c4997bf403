pub mod accounts;
pub mod dispatch;
pub mod galaxy;
pub mod scan;
