pub mod booking;
pub mod contact;
pub mod payment;

pub use booking::{BookingDetails, BookingResponse, BookingSubmission, ConsultationType};
pub use contact::ContactSubmission;
pub use payment::PaymentEvent;
