//! Typed bindings for Redis integer counters.
//!
//! Counter keys are declared once with [`counter_key!`] and bound to a live
//! connection at the call site, so key formatting stays in one place and the
//! call site only sees `get`/`incr` on an `i64`.

use std::borrow::Cow;

use deadpool_redis::{
    Connection,
    redis::{AsyncCommands, RedisResult},
};

pub trait CounterKey {
    type Args<'r>;

    fn key_with_args(&self, args: Self::Args<'_>) -> Cow<'static, str>;
}

pub trait CounterKeyArg1 {
    type Arg0;

    fn construct(arg0: Self::Arg0) -> Self;
}

impl<T> CounterKeyArg1 for (T,) {
    type Arg0 = T;

    fn construct(arg0: Self::Arg0) -> Self { (arg0,) }
}

pub trait CounterKeyAutoConstruct {
    fn construct() -> Self;
}

impl CounterKeyAutoConstruct for () {
    fn construct() -> Self {}
}

pub trait CounterBind: CounterKey {
    /// Bind to a connection when the key takes no parameters
    fn bind<'redis>(&self, redis: &'redis mut Connection) -> Counter<'redis>
    where
        for<'r> Self::Args<'r>: CounterKeyAutoConstruct,
    {
        let key =
            self.key_with_args(CounterKeyAutoConstruct::construct());
        Counter { redis, key }
    }

    /// Bind to a connection when the key takes a single parameter
    fn bind_with<'redis>(
        &self, redis: &'redis mut Connection,
        arg: <Self::Args<'_> as CounterKeyArg1>::Arg0,
    ) -> Counter<'redis>
    where
        for<'r> Self::Args<'r>: CounterKeyArg1,
    {
        let key = self
            .key_with_args(<Self::Args<'_> as CounterKeyArg1>::construct(arg));
        Counter { redis, key }
    }
}

impl<T> CounterBind for T where T: CounterKey {}

pub struct Counter<'redis> {
    redis: &'redis mut Connection,
    key: Cow<'static, str>,
}

impl Counter<'_> {
    pub fn key(&self) -> &str { &self.key }

    pub async fn get(&mut self) -> RedisResult<Option<i64>> {
        self.redis.get(&*self.key).await
    }

    /// Read the counter, treating an absent key as zero
    pub async fn get_or_zero(&mut self) -> RedisResult<i64> {
        Ok(self.get().await?.unwrap_or(0))
    }

    pub async fn incr(&mut self) -> RedisResult<i64> {
        self.redis.incr(&*self.key, 1i64).await
    }

    pub async fn incr_by(&mut self, amount: i64) -> RedisResult<i64> {
        self.redis.incr(&*self.key, amount).await
    }
}

#[macro_export]
macro_rules! counter_key {
    ($name:ident => $format_key:literal[$($arg:ident:$ty:ident),*]) => {
        #[doc=concat!("Redis counter binding for key `", $format_key, "`")]
        pub struct $name;

        impl $crate::counter::CounterKey for $name {
            type Args<'r> = ($(&'r $ty,)*);

            fn key_with_args(&self, args: Self::Args<'_>) -> std::borrow::Cow<'static, str> {
                let ($($arg,)*) = args;

                (format!($format_key, $($arg),*)).into()
            }
        }
    };
    ($name:ident => $key:literal) => {
        #[doc=concat!("Redis counter binding for key `", $key, "`")]
        pub struct $name;

        impl $crate::counter::CounterKey for $name {
            type Args<'r> = ();

            fn key_with_args(&self, _: Self::Args<'_>) -> std::borrow::Cow<'static, str> {
                ($key).into()
            }
        }
    };
}
