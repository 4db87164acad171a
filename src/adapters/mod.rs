// Adapters layer: concrete implementations for external systems (email provider, preference storage).

pub mod preference;
pub mod resend;
