/// Builds [`Params`](crate::Params) in the listed order.
///
/// ```
/// let params = query::params! { "name" => "John", "age" => 20 };
/// assert_eq!(query::filter("name={:name} && age>{:age}", Some(&params)), "name='John' && age>20");
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::Params::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut params = $crate::Params::new();
        $(
            params.insert($key, $value);
        )+
        params
    }};
}
