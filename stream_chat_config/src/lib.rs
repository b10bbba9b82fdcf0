use anyhow::Context;

pub type Assign<T> = fn(&mut T, String);

/// Builds a `T` from its default by assigning the value of each environment key in order.
///
/// The first key that isn't set stops the fold with an error naming that key.
pub fn load_from_env<T: Default + std::fmt::Debug>(
    keys: &[(&str, Assign<T>)],
) -> anyhow::Result<T> {
    let get = |key: &str| {
        log::trace!("looking up {key}");
        let res = std::env::var(key);
        res.with_context(|| anyhow::anyhow!("key '{key}' was not found"))
    };

    log::trace!("loading env vars for: {}", std::any::type_name::<T>());

    let this = keys.iter().try_fold(T::default(), |mut this, (key, func)| {
        func(&mut this, get(key)?);
        Ok::<_, anyhow::Error>(this)
    });

    if let Ok(this) = &this {
        log::debug!("created: {:?}", this);
    }
    this
}

pub trait LoadFromEnv
where
    Self: Sized,
{
    fn load_from_env() -> anyhow::Result<Self>;
}
