use std::future::Future;

use tracing::warn;

use crate::error::ApiError;

/// One independently-loaded piece of view state.
///
/// When the load failed, `value` holds the safe default and `notice`
/// carries the transient text a view may surface. A missing resource is
/// an empty state, not a failure, so it produces no notice.
pub struct Slice<T> {
    pub value: T,
    pub notice: Option<String>,
}

impl<T> Slice<T> {
    pub fn loaded(value: T) -> Self {
        Self { value, notice: None }
    }
}

/// Run one load to completion without letting its failure affect any
/// sibling load (independent failure isolation). There is no retry: a
/// failed slice stays at its default until the view is re-activated.
///
/// `Unauthorized` is the one failure that is not isolated: it means
/// the whole activation is over, so it propagates for the caller to
/// turn into a redirect.
pub async fn isolated<T, F>(label: &str, default: T, load: F) -> Result<Slice<T>, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    match load.await {
        Ok(value) => Ok(Slice::loaded(value)),
        Err(ApiError::Unauthorized) => Err(ApiError::Unauthorized),
        Err(ApiError::NotFound) => Ok(Slice { value: default, notice: None }),
        Err(err) => {
            warn!("{label} load failed: {err}");
            Ok(Slice { value: default, notice: Some(err.user_notice()) })
        }
    }
}
