pub mod requests;
pub mod responses;

pub use requests::{LoginRequest, RegisterParentRequest, UpdateProfileRequest};
pub use responses::{LoginResponse, RefreshTokenResponse, TokenVerificationResponse, UserInfoResponse};
