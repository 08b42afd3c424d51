/// The read side of a session that access checks depend on.
pub trait SessionQueries {
    fn is_authenticated(&self) -> bool;

    fn is_admin(&self) -> bool;
}
