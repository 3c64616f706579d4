//! Business logic services for the application layer.

pub mod social_link_service;

pub use social_link_service::SocialLinkService;
