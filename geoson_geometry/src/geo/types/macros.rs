#[macro_export]
macro_rules! impl_from_points {
	($($t:ty),*) => {$(
		impl<T> From<Vec<T>> for $t
		where
			$crate::Point: From<T>,
		{
			fn from(value: Vec<T>) -> Self {
				Self(value.into_iter().map($crate::Point::from).collect())
			}
		}

		impl<'a, T, const N: usize> From<&'a [T; N]> for $t
		where
			$crate::Point: From<&'a T>,
		{
			fn from(value: &'a [T; N]) -> Self {
				Self(value.iter().map($crate::Point::from).collect())
			}
		}
	)*}
}
