//! VoiceDesk core: the tool catalog, the automation-provider client, and the
//! per-service integration facades (Gmail, Google Calendar, Slack).
//!
//! Nothing in here talks HTTP to the voice platform; that is the gateway's
//! job. This crate only knows how to describe tools and how to execute them
//! against the provider.

pub mod calendar;
pub mod catalog;
pub mod chat;
pub mod client;
pub mod mail;

pub use calendar::CalendarTools;
pub use catalog::{catalog, platform_tools, ToolDescriptor, TOOL_TIMEOUT_SECONDS};
pub use chat::ChatTools;
pub use client::{Composio, ToolResult};
pub use mail::MailTools;
