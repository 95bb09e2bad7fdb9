pub struct Validator<'a, T, U> {
    subject: &'a T,
    validate_list: Vec<Box<dyn Validate<T, U>>>,
}

impl<'a, T, U> Validator<'a, T, U> {
    pub fn new(subject: &'a T) -> Validator<'a, T, U> {
        Self {
            subject,
            validate_list: Vec::new(),
        }
    }

    pub fn should(mut self, validator: impl Validate<T, U> + 'static) -> Self {
        self.validate_list.push(Box::new(validator));
        self
    }

    /// Runs every rule and reports all failures in the order the rules were added.
    pub fn validate(self) -> Result<&'a T, Vec<U>> {
        let errors: Vec<U> = self
            .validate_list
            .iter()
            .filter_map(|validator| validator.validate(self.subject))
            .collect();
        if errors.is_empty() {
            Ok(self.subject)
        } else {
            Err(errors)
        }
    }
}

pub trait Validate<T, U> {
    fn validate(&self, subject: &T) -> Option<U>;
}

impl<V, T, U> Validate<T, U> for V
where
    V: Fn(&T) -> Option<U>,
{
    fn validate(&self, subject: &T) -> Option<U> {
        self(subject)
    }
}

pub trait ValidateExt<'a> {
    fn should<U>(&'a self, validate: impl Validate<Self, U> + 'static) -> Validator<'a, Self, U>
    where
        Self: Sized;
}

impl<'a, T> ValidateExt<'a> for T
where
    T: Sized,
{
    fn should<U>(&'a self, validate: impl Validate<T, U> + 'static) -> Validator<'a, T, U> {
        Validator::<'a, T, U>::new(self).should(validate)
    }
}
