mod server;

mod json;
mod wire;
mod error;
mod auth;
mod client;

#[cfg(feature = "authentication")]
mod authentication;

#[cfg(feature = "cloud-script")]
mod cloud_script;

#[cfg(feature = "data")]
mod data;

#[cfg(feature = "experimentation")]
mod experimentation;

#[cfg(feature = "groups")]
mod groups;

#[cfg(feature = "insights")]
mod insights;

#[cfg(feature = "matchmaker")]
mod matchmaker;

#[cfg(feature = "multiplayer")]
mod multiplayer;

#[cfg(feature = "profiles")]
mod profiles;
