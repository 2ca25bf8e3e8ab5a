pub mod notifications_service;
