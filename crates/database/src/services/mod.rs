pub mod authorization;
pub mod eligibility;
pub mod holds;
pub mod registration;
pub mod schedule;
pub mod waitlist;
pub mod waivers;
