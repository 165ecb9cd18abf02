use coro_local::{
    local_handle::LocalHandle,
    local_traits::{from_local, CoroLocal},
    local_value::wrap,
};

struct TraceContext {
    span_id: u64,
}

impl CoroLocal for TraceContext {}

fn main()
{
    // A coroutine frame declares a local of a plain value type. The declaration site
    // knows the concrete type; the owning slot only ever sees a LocalHandle.
    let mut handle: LocalHandle = wrap(42_i32);

    println!("Access the wrapped value through a runtime verified cast");
    {
        let value: &i32 = handle.cast_wrapped::<i32>().unwrap();
        dbg!(value);
    }

    println!("A miss is a normal outcome, not an error");
    {
        dbg!(handle.cast_wrapped::<f64>().is_none());
        dbg!(handle.cast_derived::<TraceContext>().is_none());
    }

    println!("Mutate the stored value in place between resumptions");
    {
        *handle.cast_wrapped_mut::<i32>().unwrap() += 1;
        dbg!(handle.cast_wrapped::<i32>().unwrap());
    }

    // Custom leaf types participate directly and carry their own identity.
    let handle: LocalHandle = from_local(TraceContext { span_id: 7 });

    println!("Query identity without casting");
    {
        dbg!(TraceContext::is_instance_of(&handle));
        dbg!(&handle);
    }

    println!("Cast back to the leaf type");
    {
        let ctx: &TraceContext = handle.cast_derived::<TraceContext>().unwrap();
        dbg!(ctx.span_id);
    }

    // Dropping the handle tears down the stored value through the dynamic
    // destructor chain - nothing else to do.
}
