pub mod tracking_session;
