// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Request middleware (token inspection, authenticated gateway).

pub mod auth;
pub mod gateway;

pub use gateway::{
    Gateway, GatewayOutcome, LoginRedirect, LogoutHook, LogoutReason, OutgoingRequest,
};
