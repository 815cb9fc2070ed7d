//! Value assertions available on [`Test`]
//!
//! Each assertion has a plain form and a `_with` form taking
//! [`AssertParameters`] (or just a message string).

use crate::compare::{ToValue, Value};
use crate::models::Fault;

use super::parameters::AssertParameters;
use super::test::Test;

impl Test {
    pub fn assert_equal(&self, expected: impl ToValue, actual: impl ToValue) -> Result<(), Fault> {
        self.assert_equal_with(expected, actual, AssertParameters::default())
    }

    pub fn assert_equal_with(
        &self,
        expected: impl ToValue,
        actual: impl ToValue,
        params: impl Into<AssertParameters>,
    ) -> Result<(), Fault> {
        let params = params.into();
        let (expected, actual) = (expected.to_value(), actual.to_value());
        if self.compare_functions(&params).are_equal(&expected, &actual) {
            return Ok(());
        }
        let text = self
            .message_functions(&params)
            .expected_equal(&expected, &actual, params.message.as_deref());
        Err(Fault::assertion(text))
    }

    pub fn assert_not_equal(&self, not_expected: impl ToValue, actual: impl ToValue) -> Result<(), Fault> {
        self.assert_not_equal_with(not_expected, actual, AssertParameters::default())
    }

    pub fn assert_not_equal_with(
        &self,
        not_expected: impl ToValue,
        actual: impl ToValue,
        params: impl Into<AssertParameters>,
    ) -> Result<(), Fault> {
        let params = params.into();
        let (not_expected, actual) = (not_expected.to_value(), actual.to_value());
        if self.compare_functions(&params).are_not_equal(&not_expected, &actual) {
            return Ok(());
        }
        let text = self
            .message_functions(&params)
            .expected_not_equal(&not_expected, &actual, params.message.as_deref());
        Err(Fault::assertion(text))
    }

    /// Assert that both references point at the same object
    pub fn assert_same<T>(&self, expected: &T, actual: &T) -> Result<(), Fault>
    where
        T: ToValue + ?Sized,
    {
        self.assert_same_with(expected, actual, AssertParameters::default())
    }

    pub fn assert_same_with<T>(&self, expected: &T, actual: &T, params: impl Into<AssertParameters>) -> Result<(), Fault>
    where
        T: ToValue + ?Sized,
    {
        if std::ptr::eq(expected, actual) {
            return Ok(());
        }
        let params = params.into();
        let text = self
            .message_functions(&params)
            .expected_same(expected, actual, params.message.as_deref());
        Err(Fault::assertion(text))
    }

    pub fn assert_not_same<T>(&self, expected: &T, actual: &T) -> Result<(), Fault>
    where
        T: ToValue + ?Sized,
    {
        self.assert_not_same_with(expected, actual, AssertParameters::default())
    }

    pub fn assert_not_same_with<T>(
        &self,
        expected: &T,
        actual: &T,
        params: impl Into<AssertParameters>,
    ) -> Result<(), Fault>
    where
        T: ToValue + ?Sized,
    {
        if !std::ptr::eq(expected, actual) {
            return Ok(());
        }
        let params = params.into();
        let text = self
            .message_functions(&params)
            .expected_not_same(expected, actual, params.message.as_deref());
        Err(Fault::assertion(text))
    }

    /// Assert that `value` converts to [`Value::Null`], e.g. `None`
    pub fn assert_null(&self, value: impl ToValue) -> Result<(), Fault> {
        self.assert_null_with(value, AssertParameters::default())
    }

    pub fn assert_null_with(&self, value: impl ToValue, params: impl Into<AssertParameters>) -> Result<(), Fault> {
        self.assert_equal_with(Value::Null, value, params)
    }

    pub fn assert_not_null(&self, value: impl ToValue) -> Result<(), Fault> {
        self.assert_not_null_with(value, AssertParameters::default())
    }

    pub fn assert_not_null_with(&self, value: impl ToValue, params: impl Into<AssertParameters>) -> Result<(), Fault> {
        self.assert_not_equal_with(Value::Null, value, params)
    }

    pub fn assert_true(&self, value: bool) -> Result<(), Fault> {
        self.assert_true_with(value, AssertParameters::default())
    }

    pub fn assert_true_with(&self, value: bool, params: impl Into<AssertParameters>) -> Result<(), Fault> {
        self.assert_equal_with(true, value, params)
    }

    pub fn assert_false(&self, value: bool) -> Result<(), Fault> {
        self.assert_false_with(value, AssertParameters::default())
    }

    pub fn assert_false_with(&self, value: bool, params: impl Into<AssertParameters>) -> Result<(), Fault> {
        self.assert_equal_with(false, value, params)
    }

    /// Assert `value > lower_bound`; a missing ordering strategy is returned as-is
    pub fn assert_greater_than(&self, value: impl ToValue, lower_bound: impl ToValue) -> Result<(), Fault> {
        self.assert_greater_than_with(value, lower_bound, AssertParameters::default())
    }

    pub fn assert_greater_than_with(
        &self,
        value: impl ToValue,
        lower_bound: impl ToValue,
        params: impl Into<AssertParameters>,
    ) -> Result<(), Fault> {
        let params = params.into();
        let (value, lower_bound) = (value.to_value(), lower_bound.to_value());
        if self.compare_functions(&params).is_greater_than(&value, &lower_bound)? {
            return Ok(());
        }
        let text = self
            .message_functions(&params)
            .expected_greater_than(&value, &lower_bound, params.message.as_deref());
        Err(Fault::assertion(text))
    }

    pub fn assert_greater_than_or_equal_to(&self, value: impl ToValue, lower_bound: impl ToValue) -> Result<(), Fault> {
        self.assert_greater_than_or_equal_to_with(value, lower_bound, AssertParameters::default())
    }

    pub fn assert_greater_than_or_equal_to_with(
        &self,
        value: impl ToValue,
        lower_bound: impl ToValue,
        params: impl Into<AssertParameters>,
    ) -> Result<(), Fault> {
        let params = params.into();
        let (value, lower_bound) = (value.to_value(), lower_bound.to_value());
        if self
            .compare_functions(&params)
            .is_greater_than_or_equal_to(&value, &lower_bound)?
        {
            return Ok(());
        }
        let text = self.message_functions(&params).expected_greater_than_or_equal_to(
            &value,
            &lower_bound,
            params.message.as_deref(),
        );
        Err(Fault::assertion(text))
    }

    /// Assert `lower_bound <= value <= upper_bound`
    pub fn assert_between(
        &self,
        lower_bound: impl ToValue,
        value: impl ToValue,
        upper_bound: impl ToValue,
    ) -> Result<(), Fault> {
        self.assert_between_with(lower_bound, value, upper_bound, AssertParameters::default())
    }

    pub fn assert_between_with(
        &self,
        lower_bound: impl ToValue,
        value: impl ToValue,
        upper_bound: impl ToValue,
        params: impl Into<AssertParameters>,
    ) -> Result<(), Fault> {
        let params = params.into();
        let lower_bound = lower_bound.to_value();
        let value = value.to_value();
        let upper_bound = upper_bound.to_value();
        if self
            .compare_functions(&params)
            .is_between(&lower_bound, &value, &upper_bound)?
        {
            return Ok(());
        }
        let text = self.message_functions(&params).expected_between(
            &lower_bound,
            &value,
            &upper_bound,
            params.message.as_deref(),
        );
        Err(Fault::assertion(text))
    }
}
