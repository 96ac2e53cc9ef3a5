//! Wrapper templates for the three target libraries.
//!
//! A wrapper template is the fixed skeleton of a runnable form component
//! with holes for the defaults block and the rendered field markup. The
//! three targets differ in how the form hook is constructed, how the
//! validation schema is attached, and how the submit handler composes with
//! the rendered fields.

use crate::target::TargetLibrary;

/// Fills the wrapper template for a target with the defaults block
/// (pre-indented `key: value` lines) and the markup block.
pub fn wrapper(target: TargetLibrary, defaults: &str, markup: &str) -> String {
    match target {
        TargetLibrary::ReactHookForm => react_hook_form(defaults, markup),
        TargetLibrary::TanstackForm => tanstack_form(defaults, markup),
        TargetLibrary::Formik => formik(defaults, markup),
    }
}

/// react-hook-form: `useForm` with a `zodResolver`, submit through
/// `form.handleSubmit`.
fn react_hook_form(defaults: &str, markup: &str) -> String {
    format!(
        r#"export default function MyForm() {{
  const form = useForm<z.infer<typeof formSchema>>({{
    resolver: zodResolver(formSchema),
    defaultValues: {{
{defaults}
    }}
  }});

  const onSubmit = async (values: z.infer<typeof formSchema>) => {{
    try {{
      console.log('Form submitted:', values);
      // Add your form submission logic here
    }} catch (error) {{
      console.error("Form submission error:", error);
    }}
  }};

  return (
    <Form {{...form}}>
      <form onSubmit={{form.handleSubmit(onSubmit)}} className="p-4 space-y-4">
{markup}

        <Button type="submit">Submit</Button>
      </form>
    </Form>
  );
}}"#
    )
}

/// TanStack Form: defaults cast to the schema type, validation attached via
/// the `zodValidator` adapter on change.
fn tanstack_form(defaults: &str, markup: &str) -> String {
    format!(
        r#"export default function MyForm() {{
  const form = useForm({{
    defaultValues: {{
{defaults}
    }} as z.infer<typeof formSchema>,
    onSubmit: async (values) => {{
      console.log(values);
    }},
    validatorAdapter: zodValidator(),
    validators: {{
      onChange: formSchema,
    }},
  }});

  return (
    <Form {{...form}}>
{markup}

      <Button type="submit">Submit</Button>
    </Form>
  );
}}"#
    )
}

/// Formik: `useFormik` with `initialValues` and a Yup `validationSchema`,
/// submit through `formik.handleSubmit`.
fn formik(defaults: &str, markup: &str) -> String {
    format!(
        r#"export default function MyForm() {{
  const formik = useFormik({{
    initialValues: {{
{defaults}
    }},
    validationSchema: formSchema,
    onSubmit: async (values) => {{
      console.log(values);
    }},
  }});

  return (
    <Form {{...formik}}>
      <form onSubmit={{formik.handleSubmit}} className="p-4 space-y-4">
{markup}

        <Button type="submit">Submit</Button>
      </form>
    </Form>
  );
}}"#
    )
}
