pub mod dto;
pub mod weekly_service;
