//! C entry points for the random number bridge.

use layerdesc_core::{GeneratorWrapper, NumberGenerator, SeededGenerator, ThreadRandomGenerator};
use parking_lot::Mutex;

use crate::status::{guard, LayerdescStatus};
use crate::strings::{handle, require_out};

/// Opaque generator handle.
pub struct LayerdescGenerator {
    generator: Mutex<GeneratorWrapper<Box<dyn NumberGenerator + Send>>>,
}

impl LayerdescGenerator {
    fn boxed(generator: Box<dyn NumberGenerator + Send>) -> *mut Self {
        let wrapped = Self {
            generator: Mutex::new(GeneratorWrapper::with_generator(generator)),
        };
        Box::into_raw(Box::new(wrapped))
    }
}

/// Create a generator backed by the thread-local RNG.
#[no_mangle]
pub extern "C" fn layerdesc_generator_new() -> *mut LayerdescGenerator {
    LayerdescGenerator::boxed(Box::new(ThreadRandomGenerator))
}

/// Create a generator whose sequence is fixed by `seed`.
#[no_mangle]
pub extern "C" fn layerdesc_generator_new_seeded(seed: u64) -> *mut LayerdescGenerator {
    LayerdescGenerator::boxed(Box::new(SeededGenerator::new(seed)))
}

/// Release a generator handle. Passing null is a no-op.
///
/// # Safety
///
/// `generator` must be null or a handle from one of the
/// `layerdesc_generator_new*` constructors that has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn layerdesc_generator_free(generator: *mut LayerdescGenerator) {
    if !generator.is_null() {
        drop(Box::from_raw(generator));
    }
}

/// Draw a value in `min..=max` into `*out`.
///
/// Returns `InvalidRange` and leaves `*out` untouched when `min > max`.
///
/// # Safety
///
/// `generator` must be a live handle and `out` a writable pointer.
#[no_mangle]
pub unsafe extern "C" fn layerdesc_generator_generate(
    generator: *const LayerdescGenerator,
    min: i64,
    max: i64,
    out: *mut i64,
) -> LayerdescStatus {
    guard("generate", || {
        let generator = handle(generator, "generator")?;
        require_out(out, "out")?;
        let value = generator.generator.lock().generate(min, max)?;
        *out = value;
        Ok(())
    })
}
