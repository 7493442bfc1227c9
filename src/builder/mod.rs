/*!
Tools for building a context.

# Basic methods

A formula is given to a context through three methods:
- [increase_max_var](crate::context::GenericContext::increase_max_var), to obtain a fresh atom.
- [add](crate::context::GenericContext::add), to add a literal to the clause under construction, or with `0` to add the clause to the context.
- [assume](crate::context::GenericContext::assume), to assume a literal for the next solve.

Clauses are added at level `0`, and so a clause may immediately fix the value of an atom, or show the formula to be unsatisfiable.
In the latter case the context is [inconsistent](crate::context::GenericContext::inconsistent), though clauses may still be added.

# Examples

```rust
# use kestrel_sat::context::Context;
# use kestrel_sat::config::Config;
# use kestrel_sat::reports::Report;
let mut the_context = Context::from_config(Config::default());
let p = the_context.increase_max_var().expect("a fresh atom") as i32;
let q = the_context.increase_max_var().expect("a fresh atom") as i32;

for literal in [p, -q, 0, -p, q, 0] {
    assert!(the_context.add(literal).is_ok());
}
assert_eq!(the_context.added_original_clauses(), 2);

assert!(the_context.assume(q).is_ok());
assert_eq!(the_context.solve(0), Ok(Report::Satisfiable));
assert_eq!(the_context.deref(p), Ok(Some(true)));
```

Adding a clause with a literal outside the language of the context is an error, and leaves the clause under construction untouched.

```rust
# use kestrel_sat::context::Context;
# use kestrel_sat::types::err::{BoundsError, ErrorKind};
let mut the_context = Context::default();
let p = the_context.increase_max_var().expect("a fresh atom") as i32;

assert_eq!(the_context.add(p + 1), Err(ErrorKind::Bounds(BoundsError::UnknownAtom)));
assert!(the_context.add(p).is_ok());
assert!(the_context.add(0).is_ok());
```
*/

mod atoms;
mod clause;
mod preprocess;
mod session;
