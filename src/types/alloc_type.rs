#[cfg(feature = "std")]
pub type Rc<T> = std::rc::Rc<T>;
#[cfg(not(feature = "std"))]
pub type Rc<T> = alloc::rc::Rc<T>;

#[cfg(feature = "std")]
pub type Arc<T> = std::sync::Arc<T>;
#[cfg(not(feature = "std"))]
pub type Arc<T> = alloc::sync::Arc<T>;

#[cfg(feature = "std")]
pub type String = std::string::String;
#[cfg(not(feature = "std"))]
pub type String = alloc::string::String;
