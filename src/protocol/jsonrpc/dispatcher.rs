// Copyright (c) 2025 Switchboard Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! JSON-RPC 2.0 method dispatcher.
//!
//! This module owns the method registry and the routing state machine for a
//! single request: parse, validate, look up, invoke, respond. Every path
//! terminates in a well-formed [`Response`]; `dispatch` never panics and never
//! lets a fault escape uncategorized.
//!
//! Registration must complete before the dispatcher starts serving traffic.
//! `register` takes `&mut self` and `dispatch` takes `&self`, so once the
//! dispatcher is shared (e.g. behind an `Arc`) the borrow checker enforces
//! the phase split and concurrent dispatch reads the registry without
//! locking.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt};
use serde_json::Value;

use super::error::{Error, RpcError};
use super::types::{Id, Request, Response};
use super::validation::{parse_request, validate_request};

/// Ambient caller context threaded into each method call.
///
/// Carries transport-specific data (connection or session attributes) that is
/// opaque to the dispatcher. Passed explicitly per call, never held as global
/// state, so concurrent dispatches stay independent.
#[derive(Debug, Clone, Default)]
pub struct CallerContext {
    /// Transport-supplied metadata for this request
    pub metadata: HashMap<String, String>,
}

impl CallerContext {
    /// Creates an empty caller context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a metadata entry, builder-style.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Outcome of a method handler: a result value or a protocol-level error.
///
/// The `Result` type enforces the envelope invariant at the source: a handler
/// cannot populate both slots or neither.
pub type MethodResult = std::result::Result<Value, RpcError>;

/// The capability the dispatcher consumes.
///
/// A handler binds exactly one method name to a unit of business logic. The
/// name must be stable for the handler's lifetime since it is read once at
/// registration. Errors returned from `handle` are relayed to the caller
/// verbatim; codes outside the fixed catalogue are the handler's own range
/// and are not reinterpreted.
#[async_trait]
pub trait MethodHandler: Send + Sync {
    /// The method name this handler is registered under.
    fn method_name(&self) -> &str;

    /// Executes the RPC method.
    ///
    /// `params` travels inside `request` uninterpreted; decoding it according
    /// to the method's expected shape is the handler's concern.
    async fn handle(&self, ctx: &CallerContext, request: &Request) -> MethodResult;
}

type BoxedMethodFn =
    Box<dyn Fn(Option<Value>, CallerContext) -> BoxFuture<'static, MethodResult> + Send + Sync>;

/// A function-based handler, binding a method name to an async closure.
///
/// Convenient for small methods and tests; the closure receives the request's
/// `params` and a clone of the caller context.
pub struct FnHandler {
    name: String,
    func: BoxedMethodFn,
}

impl FnHandler {
    /// Creates a handler from a method name and an async closure.
    pub fn new<F, Fut>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(Option<Value>, CallerContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = MethodResult> + Send + 'static,
    {
        Self {
            name: name.into(),
            func: Box::new(move |params, ctx| func(params, ctx).boxed()),
        }
    }
}

#[async_trait]
impl MethodHandler for FnHandler {
    fn method_name(&self) -> &str {
        &self.name
    }

    async fn handle(&self, ctx: &CallerContext, request: &Request) -> MethodResult {
        (self.func)(request.params.clone(), ctx.clone()).await
    }
}

/// Routes JSON-RPC requests to registered method handlers.
///
/// The registry is a plain map: last registration for a name wins, and no
/// name-shape validation happens at registration time. An empty method name
/// may be registered but can never be dispatched to, because an empty method
/// fails the request-shape check before lookup.
#[derive(Default)]
pub struct Dispatcher {
    /// Registered method handlers, keyed by method name
    handlers: HashMap<String, Arc<dyn MethodHandler>>,
}

impl Dispatcher {
    /// Creates a dispatcher with an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler under its own method name.
    ///
    /// Silently overwrites any prior registration for that name.
    pub fn register<H>(&mut self, handler: H)
    where
        H: MethodHandler + 'static,
    {
        let name = handler.method_name().to_string();
        if self.handlers.insert(name.clone(), Arc::new(handler)).is_some() {
            tracing::debug!(method = %name, "replacing previously registered handler");
        }
    }

    /// Returns the registered method names.
    pub fn registered_methods(&self) -> Vec<String> {
        self.handlers.keys().cloned().collect()
    }

    /// Processes one raw JSON-RPC payload and returns the response envelope.
    ///
    /// Total over its input: parse failures, shape faults, unknown methods,
    /// and handler errors all map to an error response; nothing is retried
    /// (every pre-handler fault is a deterministic function of the input) and
    /// nothing escapes as a panic. A payload that cannot be parsed gets a
    /// null response id, since a malformed payload cannot be trusted to carry
    /// a usable one; every later fault echoes the parsed id.
    pub async fn dispatch(&self, raw: &str, ctx: &CallerContext) -> Response {
        let request = match parse_request(raw) {
            Ok(request) => request,
            Err(err) => {
                tracing::debug!(error = %err, "rejecting unparseable payload");
                return Response::error(Id::Null, RpcError::invalid_request());
            }
        };

        let id = request.id_or_null();

        if let Err(err) = validate_request(&request) {
            tracing::debug!(method = %request.method, error = %err, "rejecting invalid request");
            return match err {
                Error::Version(_) => Response::error(id, RpcError::invalid_version()),
                _ => Response::error(id, RpcError::invalid_request()),
            };
        }

        let handler = match self.handlers.get(&request.method) {
            Some(handler) => Arc::clone(handler),
            None => {
                tracing::debug!(method = %request.method, "no handler registered");
                return Response::error(id, RpcError::method_not_found());
            }
        };

        tracing::debug!(method = %request.method, id = %id, "dispatching request");

        match handler.handle(ctx, &request).await {
            Ok(value) => Response::success(id, value),
            Err(err) => {
                tracing::debug!(method = %request.method, code = err.code, "handler returned error");
                Response::error(id, err)
            }
        }
    }
}
