pub mod rewards_service;
