//! Host session tokens and form nonces

mod jwt;

pub use jwt::{Capability, Claims, JwtService, TokenType};
