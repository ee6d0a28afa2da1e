pub mod config;
pub mod error;
pub mod http;
pub mod meetings;
pub mod platform;

pub use config::{Config, WebexConfig};
pub use error::ApiError;
pub use http::{create_router, AppState};
pub use meetings::{MeetingDetails, MeetingStarter, MeetingStatus, Meetings, StartMeetingResult};
pub use platform::{ChannelMember, PlatformClient, Post, RestClient};
