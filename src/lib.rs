mod allowed_headers;
mod allowed_methods;
pub mod constants;
mod context;
mod cors;
mod exposed_headers;
mod gate;
pub mod global;
mod header_builder;
mod headers;
pub mod host;
mod options;
mod origin;
mod policy;
mod result;
pub mod settings;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use context::RequestContext;
pub use cors::Cors;
pub use exposed_headers::ExposedHeaders;
pub use headers::{Header, HeaderWrite, Headers};
pub use host::{CorsRequest, CorsResponse, apply_headers};
pub use options::{CorsOptions, ValidationError};
pub use origin::{AllowedOrigins, OriginMatcher, PatternError};
pub use policy::OriginPolicy;
pub use result::{
    CorsDecision, PreflightRejection, PreflightRejectionReason, SimpleRejection,
    SimpleRejectionReason,
};
pub use settings::{CorsSettings, ListSetting, PolicySettings};
pub use util::split_header_list;
