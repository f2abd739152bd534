//! Proximity circle and nearby-pin geometry for a live-location map view.
//!
//! The geometry in [`libraries`] is pure and synchronous. [`services`] holds
//! the seams to the map widget, the location source, and the notification
//! dialogs, plus the tracker that drives a [`models::MapView`] from a
//! location stream. [`handlers`] exposes the geometry as GeoJSON over HTTP.

pub mod config;
pub mod handlers;
pub mod libraries;
pub mod models;
pub mod services;
