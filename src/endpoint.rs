//! Declarative endpoint descriptors and per-call request contexts.
//!
//! Every API operation is a static [`Endpoint`] constant: a method, a path template with
//! `{name}` placeholders, the query parameters it accepts, and whether it sends a JSON body.
//! The type parameters bind the request body and response shapes so
//! [`RequestExecutor::invoke`](crate::executor::RequestExecutor::invoke) stays generic.

pub mod catalog;

pub use catalog::*;

// self
use crate::{_prelude::*, error::ConfigError, http::HttpMethod};

/// Body type for endpoints that send no request payload.
pub type NoBody = ();

/// Static description of one API operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EndpointDescriptor {
	/// Stable operation name used in spans, metrics, and errors.
	pub name: &'static str,
	/// HTTP method.
	pub method: HttpMethod,
	/// Path relative to the base URL; `{name}` segments are placeholders.
	pub path_template: &'static str,
	/// Placeholders appearing in `path_template`.
	pub path_params: &'static [&'static str],
	/// Query parameters the operation accepts, each individually optional.
	pub query_params: &'static [&'static str],
	/// Whether a JSON body is sent.
	pub has_body: bool,
}
impl EndpointDescriptor {
	/// Resolves the absolute URL for this operation against `base`.
	///
	/// Placeholder values are percent-encoded as single path segments. Query pairs whose value
	/// is `None` are skipped entirely, and no `?` is emitted when nothing remains.
	pub fn resolve(
		&self,
		base: &Url,
		path: &[(&'static str, String)],
		query: &[(&'static str, Option<String>)],
	) -> Result<Url, ConfigError> {
		if let Some((name, _)) = path.iter().find(|(name, _)| !self.path_params.contains(name)) {
			return Err(self.undeclared(name));
		}
		if let Some((name, _)) = query.iter().find(|(name, _)| !self.query_params.contains(name)) {
			return Err(self.undeclared(name));
		}

		let mut url = base.clone();

		url.set_query(None);
		url.set_fragment(None);

		{
			let mut segments = url
				.path_segments_mut()
				.map_err(|_| ConfigError::CannotBeABase { url: base.to_string() })?;

			segments.pop_if_empty();

			for segment in self.path_template.split('/').filter(|segment| !segment.is_empty()) {
				match placeholder(segment) {
					Some(param) => {
						let value = path
							.iter()
							.find(|(name, value)| *name == param && !value.is_empty())
							.map(|(_, value)| value.as_str())
							.ok_or(ConfigError::MissingPathParam { endpoint: self.name, param })?;

						segments.push(value);
					},
					None => {
						segments.push(segment);
					},
				}
			}
		}

		let mut present = query.iter().filter_map(|(name, value)| Some((*name, value.as_deref()?)));

		if let Some(first) = present.next() {
			let mut pairs = url.query_pairs_mut();

			pairs.append_pair(first.0, first.1);

			for (name, value) in present {
				pairs.append_pair(name, value);
			}
		}

		Ok(url)
	}

	fn undeclared(&self, param: &str) -> ConfigError {
		ConfigError::UndeclaredParam { endpoint: self.name, param: param.to_owned() }
	}
}
impl Display for EndpointDescriptor {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "{} {} {}", self.name, self.method, self.path_template)
	}
}

fn placeholder(segment: &'static str) -> Option<&'static str> {
	segment.strip_prefix('{')?.strip_suffix('}')
}

/// Descriptor bound to its request body type `B` and response type `R`.
pub struct Endpoint<B, R> {
	/// Untyped operation description.
	pub descriptor: EndpointDescriptor,
	_shape: PhantomData<fn(&B) -> R>,
}
impl<B, R> Endpoint<B, R> {
	/// Binds `descriptor` to the body and response shapes.
	pub const fn new(descriptor: EndpointDescriptor) -> Self {
		Self { descriptor, _shape: PhantomData }
	}

	/// Starts a request context for one call.
	pub fn request<'a>(self) -> RequestContext<'a, B, R> {
		RequestContext { endpoint: self, path: Vec::new(), query: Vec::new(), body: None }
	}
}
impl<B, R> Clone for Endpoint<B, R> {
	fn clone(&self) -> Self {
		*self
	}
}
impl<B, R> Copy for Endpoint<B, R> {}
impl<B, R> Debug for Endpoint<B, R> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("Endpoint").field(&self.descriptor).finish()
	}
}

/// Per-call values for one [`Endpoint`] invocation.
pub struct RequestContext<'a, B, R> {
	endpoint: Endpoint<B, R>,
	path: Vec<(&'static str, String)>,
	query: Vec<(&'static str, Option<String>)>,
	body: Option<&'a B>,
}
impl<'a, B, R> RequestContext<'a, B, R> {
	/// Binds the `{name}` placeholder to `value`.
	pub fn path(mut self, name: &'static str, value: impl Into<String>) -> Self {
		self.path.push((name, value.into()));

		self
	}

	/// Adds an optional query parameter; `None` is never rendered.
	pub fn query<V>(mut self, name: &'static str, value: Option<V>) -> Self
	where
		V: ToString,
	{
		self.query.push((name, value.map(|value| value.to_string())));

		self
	}

	/// Attaches the JSON body.
	pub fn body(mut self, body: &'a B) -> Self {
		self.body = Some(body);

		self
	}

	/// Descriptor being invoked.
	pub fn descriptor(&self) -> &EndpointDescriptor {
		&self.endpoint.descriptor
	}

	/// Resolves the absolute URL for this call.
	pub fn url(&self, base: &Url) -> Result<Url, ConfigError> {
		self.endpoint.descriptor.resolve(base, &self.path, &self.query)
	}

	/// Returns the body when the descriptor sends one.
	///
	/// Fails with [`ConfigError::MissingBody`] when the descriptor expects a body but none was
	/// attached. Bodies attached to bodiless descriptors are ignored.
	pub fn payload(&self) -> Result<Option<&'a B>, ConfigError> {
		let descriptor = &self.endpoint.descriptor;

		match (descriptor.has_body, self.body) {
			(true, Some(body)) => Ok(Some(body)),
			(true, None) => Err(ConfigError::MissingBody { endpoint: descriptor.name }),
			(false, _) => Ok(None),
		}
	}
}
impl<B, R> Debug for RequestContext<'_, B, R> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("RequestContext")
			.field("endpoint", &self.endpoint.descriptor.name)
			.field("path", &self.path)
			.field("query", &self.query)
			.field("has_body", &self.body.is_some())
			.finish()
	}
}
