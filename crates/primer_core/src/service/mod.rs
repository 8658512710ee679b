//! Use-case services layered over repositories.

pub mod post_service;
