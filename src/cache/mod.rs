pub mod object_cache;
pub mod register;
pub mod traits;

pub use traits::{CacheResult, ObjectCache};

/// 声明缓存插件的宏
///
/// 在编译单元加载时（ctor）将构造函数注册到全局注册表，
/// 构造函数返回 `Result<Box<dyn ObjectCache>>`。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $cache_type:ident) => {
        paste::paste! {
            #[ctor::ctor]
            fn [<__register_object_cache_ $cache_type:snake>]() {
                $crate::cache::register::register_object_cache_plugin(
                    $name,
                    std::sync::Arc::new(|| {
                        Box::pin(async {
                            $cache_type::new()
                                .map(|cache| Box::new(cache) as Box<dyn $crate::cache::ObjectCache>)
                                .map_err($crate::errors::EduSystemError::cache_connection)
                        })
                    }),
                );
            }
        }
    };
}
