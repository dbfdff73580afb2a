use memory::Value;
use tracing::trace;

use crate::context::{Context, GlobalContext};
use crate::error::NifError;
use crate::platform;

/// The unified signature for every platform NIF. Arguments arrive
/// already arity-checked by the host; failures travel on the raise
/// channel as [`NifError`].
pub type NifFn = fn(ctx: &mut Context, args: &[Value]) -> Result<Value, NifError>;

/// A static descriptor binding a qualified name to its implementation.
pub struct Nif {
    pub name: &'static str,
    pub arity: u8,
    pub func: NifFn,
}

static NIFS: [Nif; 5] = [
    Nif {
        name: "tern_lib:set_rtc_memory/1",
        arity: 1,
        func: platform::nif_set_rtc_memory,
    },
    Nif {
        name: "tern_lib:get_rtc_memory/0",
        arity: 0,
        func: platform::nif_get_rtc_memory,
    },
    Nif {
        name: "tern_lib:get_mac/0",
        arity: 0,
        func: platform::nif_get_mac,
    },
    Nif {
        name: "tern_lib:sha1/1",
        arity: 1,
        func: platform::nif_sha1,
    },
    Nif {
        name: "tern_lib:set_time_of_day/1",
        arity: 1,
        func: platform::nif_set_time_of_day,
    },
];

/// Registration entrypoint, invoked once by the host at startup. The
/// table is static, so readiness needs no work.
pub fn init(_global: &mut GlobalContext) {
    trace!("tern_lib platform nifs ready");
}

/// Resolve a qualified `module:function/arity` name to its descriptor.
/// Pure lookup over the fixed five-entry table; the host caches the
/// result at module load, so linear comparison is fine here.
pub fn get_nif(name: &str) -> Option<&'static Nif> {
    trace!("locating nif {name}");
    NIFS.iter().find(|nif| nif.name == name)
}
