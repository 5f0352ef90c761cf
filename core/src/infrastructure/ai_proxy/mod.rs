pub mod client;

pub use client::{AI_BASE_URL_ENV, AiProxyClient, Platform, render_outcome};
