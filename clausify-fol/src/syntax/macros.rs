/// Creates a variable symbol from an identifier.
#[macro_export]
macro_rules! v {
    ($v:ident) => {
        $crate::syntax::V::from(stringify!($v))
    };
}

/// Creates a function symbol from an identifier.
#[macro_export]
macro_rules! f {
    ($f:ident) => {
        $crate::syntax::F::from(stringify!($f))
    };
}

/// Creates a constant symbol from an identifier.
#[macro_export]
macro_rules! c {
    ($c:ident) => {
        $crate::syntax::C::from(stringify!($c))
    };
}

/// Creates a predicate symbol from an identifier.
#[macro_export]
macro_rules! pred {
    ($p:ident) => {
        $crate::syntax::Pred::from(stringify!($p))
    };
}

/// Creates a term: `term!(x)` is a variable, `term!(@c)` is a constant and `term!(f(x, @c))`
/// applies a function symbol.
#[macro_export]
macro_rules! term {
    ($v:ident) => {
        $crate::syntax::Term::Var {
            variable: stringify!($v).into(),
        }
    };
    (@$c:ident) => {
        $crate::syntax::Term::Const {
            constant: stringify!($c).into(),
        }
    };
    ($func:ident ($($t:tt)*)) => {
        {
            let ts: Vec<$crate::syntax::Term> = $crate::terms!($($t)*);
            $crate::syntax::F::from(stringify!($func)).app(ts)
        }
    };
}

/// Creates a list of terms, written as the arguments of [`term!`].
#[macro_export]
macro_rules! terms {
    (@acc () -> ($($result:tt)*)) => {
        vec![$($result)*]
    };
    (@acc ($v:ident $(, $($tail:tt)*)?) -> ($($result:tt)*)) => {
        $crate::terms!(@acc ($($($tail)*)?) -> ($($result)* $crate::term!($v),))
    };
    (@acc (@$c:ident $(, $($tail:tt)*)?) -> ($($result:tt)*)) => {
        $crate::terms!(@acc ($($($tail)*)?) -> ($($result)* $crate::term!(@$c),))
    };
    (@acc ($func:ident ($($t:tt)*) $(, $($tail:tt)*)?) -> ($($result:tt)*)) => {
        $crate::terms!(@acc ($($($tail)*)?) -> ($($result)* $crate::term!($func ($($t)*)),))
    };
    ($($tail:tt)*) => {
        $crate::terms!(@acc ($($tail)*) -> ())
    };
}

/// Creates an atomic formula: `atom!(P(x, @c))`.
#[macro_export]
macro_rules! atom {
    ($pred:ident ($($t:tt)*)) => {
        $crate::syntax::Atom::new(
            $crate::syntax::Pred::from(stringify!($pred)),
            $crate::terms!($($t)*),
        )
    };
}
