//! Movement domain: ECS systems wrapping the controller.

pub(crate) mod collisions;
pub(crate) mod controller;
pub(crate) mod input;

pub(crate) use controller::advance_controllers;
pub(crate) use input::read_input;
