// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Attributes of the `jvm`, `dotnet`, `go`, `nodejs`, `v8js`, `cpython` namespaces.

use crate::registry::{Entry, Stability::*};

/// Value of the garbage collector collection generation.
///
/// Type: `int`. Examples: `0`, `1`, `2`.
#[cfg(feature = "semconv_experimental")]
pub const CPYTHON_GC_GENERATION: &str = "cpython.gc.generation";

/// Generation 0
#[cfg(feature = "semconv_experimental")]
pub const CPYTHON_GC_GENERATION_VALUE_GENERATION_0: i64 = 0;

/// Generation 1
#[cfg(feature = "semconv_experimental")]
pub const CPYTHON_GC_GENERATION_VALUE_GENERATION_1: i64 = 1;

/// Generation 2
#[cfg(feature = "semconv_experimental")]
pub const CPYTHON_GC_GENERATION_VALUE_GENERATION_2: i64 = 2;

/// Name of the garbage collector managed heap generation.
///
/// Type: `string`. Examples: `"gen0"`, `"gen1"`, `"gen2"`.
pub const DOTNET_GC_HEAP_GENERATION: &str = "dotnet.gc.heap.generation";

/// Generation 0
pub const DOTNET_GC_HEAP_GENERATION_VALUE_GEN0: &str = "gen0";

/// Generation 1
pub const DOTNET_GC_HEAP_GENERATION_VALUE_GEN1: &str = "gen1";

/// Generation 2
pub const DOTNET_GC_HEAP_GENERATION_VALUE_GEN2: &str = "gen2";

/// Large Object Heap
pub const DOTNET_GC_HEAP_GENERATION_VALUE_LOH: &str = "loh";

/// Pinned Object Heap
pub const DOTNET_GC_HEAP_GENERATION_VALUE_POH: &str = "poh";

semconv_enum! {
    /// Values of [`DOTNET_GC_HEAP_GENERATION`].
    DotnetGcHeapGeneration for DOTNET_GC_HEAP_GENERATION {
        /// Generation 0
        Gen0 = "gen0",
        /// Generation 1
        Gen1 = "gen1",
        /// Generation 2
        Gen2 = "gen2",
        /// Large Object Heap
        Loh = "loh",
        /// Pinned Object Heap
        Poh = "poh",
    }
}

/// The type of memory.
///
/// Type: `string`. Examples: `"other"`, `"stack"`.
#[cfg(feature = "semconv_experimental")]
pub const GO_MEMORY_TYPE: &str = "go.memory.type";

/// Memory allocated from the heap that is reserved for stack space, whether or not it is currently in-use.
#[cfg(feature = "semconv_experimental")]
pub const GO_MEMORY_TYPE_VALUE_STACK: &str = "stack";

/// Memory used by the Go runtime, excluding other categories of memory usage described in this enumeration.
#[cfg(feature = "semconv_experimental")]
pub const GO_MEMORY_TYPE_VALUE_OTHER: &str = "other";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`GO_MEMORY_TYPE`].
    GoMemoryType for GO_MEMORY_TYPE {
        /// Memory allocated from the heap that is reserved for stack space, whether or not it is currently in-use.
        Stack = "stack",
        /// Memory used by the Go runtime, excluding other categories of memory usage described in this enumeration.
        Other = "other",
    }
}

/// Name of the buffer pool.
///
/// Type: `string`. Examples: `"mapped"`, `"direct"`.
#[cfg(feature = "semconv_experimental")]
pub const JVM_BUFFER_POOL_NAME: &str = "jvm.buffer.pool.name";

/// Name of the garbage collector action.
///
/// Type: `string`. Examples: `"end of minor GC"`, `"end of major GC"`.
pub const JVM_GC_ACTION: &str = "jvm.gc.action";

/// Name of the garbage collector cause.
///
/// Type: `string`. Examples: `"System.gc()"`, `"Allocation Failure"`.
#[cfg(feature = "semconv_experimental")]
pub const JVM_GC_CAUSE: &str = "jvm.gc.cause";

/// Name of the garbage collector.
///
/// Type: `string`. Examples: `"G1 Young Generation"`, `"G1 Old Generation"`.
pub const JVM_GC_NAME: &str = "jvm.gc.name";

/// Name of the memory pool.
///
/// Type: `string`. Examples: `"G1 Old Gen"`, `"G1 Eden space"`, `"G1 Survivor Space"`.
pub const JVM_MEMORY_POOL_NAME: &str = "jvm.memory.pool.name";

/// The type of memory.
///
/// Type: `string`. Examples: `"heap"`, `"non_heap"`.
pub const JVM_MEMORY_TYPE: &str = "jvm.memory.type";

/// Heap memory.
pub const JVM_MEMORY_TYPE_VALUE_HEAP: &str = "heap";

/// Non-heap memory
pub const JVM_MEMORY_TYPE_VALUE_NON_HEAP: &str = "non_heap";

semconv_enum! {
    /// Values of [`JVM_MEMORY_TYPE`].
    JvmMemoryType for JVM_MEMORY_TYPE {
        /// Heap memory.
        Heap = "heap",
        /// Non-heap memory
        NonHeap = "non_heap",
    }
}

/// Whether the thread is daemon or not.
///
/// Type: `boolean`.
pub const JVM_THREAD_DAEMON: &str = "jvm.thread.daemon";

/// State of the thread.
///
/// Type: `string`. Examples: `"runnable"`, `"blocked"`.
pub const JVM_THREAD_STATE: &str = "jvm.thread.state";

/// A thread that has not yet started is in this state.
pub const JVM_THREAD_STATE_VALUE_NEW: &str = "new";

/// A thread executing in the Java virtual machine is in this state.
pub const JVM_THREAD_STATE_VALUE_RUNNABLE: &str = "runnable";

/// A thread that is blocked waiting for a monitor lock is in this state.
pub const JVM_THREAD_STATE_VALUE_BLOCKED: &str = "blocked";

/// A thread that is waiting indefinitely for another thread to perform a particular action is in this state.
pub const JVM_THREAD_STATE_VALUE_WAITING: &str = "waiting";

/// A thread that is waiting for another thread to perform an action for up to a specified waiting time is in this state.
pub const JVM_THREAD_STATE_VALUE_TIMED_WAITING: &str = "timed_waiting";

/// A thread that has exited is in this state.
pub const JVM_THREAD_STATE_VALUE_TERMINATED: &str = "terminated";

semconv_enum! {
    /// Values of [`JVM_THREAD_STATE`].
    JvmThreadState for JVM_THREAD_STATE {
        /// A thread that has not yet started is in this state.
        New = "new",
        /// A thread executing in the Java virtual machine is in this state.
        Runnable = "runnable",
        /// A thread that is blocked waiting for a monitor lock is in this state.
        Blocked = "blocked",
        /// A thread that is waiting indefinitely for another thread to perform a particular action is in this state.
        Waiting = "waiting",
        /// A thread that is waiting for another thread to perform an action for up to a specified waiting time is in this state.
        TimedWaiting = "timed_waiting",
        /// A thread that has exited is in this state.
        Terminated = "terminated",
    }
}

/// The state of event loop time.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const NODEJS_EVENTLOOP_STATE: &str = "nodejs.eventloop.state";

/// Active time.
#[cfg(feature = "semconv_experimental")]
pub const NODEJS_EVENTLOOP_STATE_VALUE_ACTIVE: &str = "active";

/// Idle time.
#[cfg(feature = "semconv_experimental")]
pub const NODEJS_EVENTLOOP_STATE_VALUE_IDLE: &str = "idle";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`NODEJS_EVENTLOOP_STATE`].
    NodejsEventloopState for NODEJS_EVENTLOOP_STATE {
        /// Active time.
        Active = "active",
        /// Idle time.
        Idle = "idle",
    }
}

/// The type of garbage collection.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const V8JS_GC_TYPE: &str = "v8js.gc.type";

/// Major (Mark Sweep Compact).
#[cfg(feature = "semconv_experimental")]
pub const V8JS_GC_TYPE_VALUE_MAJOR: &str = "major";

/// Minor (Scavenge).
#[cfg(feature = "semconv_experimental")]
pub const V8JS_GC_TYPE_VALUE_MINOR: &str = "minor";

/// Incremental (Incremental Marking).
#[cfg(feature = "semconv_experimental")]
pub const V8JS_GC_TYPE_VALUE_INCREMENTAL: &str = "incremental";

/// Weak Callbacks (Process Weak Callbacks).
#[cfg(feature = "semconv_experimental")]
pub const V8JS_GC_TYPE_VALUE_WEAKCB: &str = "weakcb";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`V8JS_GC_TYPE`].
    V8jsGcType for V8JS_GC_TYPE {
        /// Major (Mark Sweep Compact).
        Major = "major",
        /// Minor (Scavenge).
        Minor = "minor",
        /// Incremental (Incremental Marking).
        Incremental = "incremental",
        /// Weak Callbacks (Process Weak Callbacks).
        Weakcb = "weakcb",
    }
}

/// The name of the space type of heap memory.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const V8JS_HEAP_SPACE_NAME: &str = "v8js.heap.space.name";

/// New memory space.
#[cfg(feature = "semconv_experimental")]
pub const V8JS_HEAP_SPACE_NAME_VALUE_NEW_SPACE: &str = "new_space";

/// Old memory space.
#[cfg(feature = "semconv_experimental")]
pub const V8JS_HEAP_SPACE_NAME_VALUE_OLD_SPACE: &str = "old_space";

/// Code memory space.
#[cfg(feature = "semconv_experimental")]
pub const V8JS_HEAP_SPACE_NAME_VALUE_CODE_SPACE: &str = "code_space";

/// Map memory space.
#[cfg(feature = "semconv_experimental")]
pub const V8JS_HEAP_SPACE_NAME_VALUE_MAP_SPACE: &str = "map_space";

/// Large object memory space.
#[cfg(feature = "semconv_experimental")]
pub const V8JS_HEAP_SPACE_NAME_VALUE_LARGE_OBJECT_SPACE: &str = "large_object_space";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`V8JS_HEAP_SPACE_NAME`].
    V8jsHeapSpaceName for V8JS_HEAP_SPACE_NAME {
        /// New memory space.
        NewSpace = "new_space",
        /// Old memory space.
        OldSpace = "old_space",
        /// Code memory space.
        CodeSpace = "code_space",
        /// Map memory space.
        MapSpace = "map_space",
        /// Large object memory space.
        LargeObjectSpace = "large_object_space",
    }
}

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::attribute("CPYTHON_GC_GENERATION", "cpython.gc.generation", Experimental),
    Entry::int_value(
        "CPYTHON_GC_GENERATION_VALUE_GENERATION_0",
        "cpython.gc.generation",
        0,
        Experimental,
    ),
    Entry::int_value(
        "CPYTHON_GC_GENERATION_VALUE_GENERATION_1",
        "cpython.gc.generation",
        1,
        Experimental,
    ),
    Entry::int_value(
        "CPYTHON_GC_GENERATION_VALUE_GENERATION_2",
        "cpython.gc.generation",
        2,
        Experimental,
    ),
    Entry::attribute("DOTNET_GC_HEAP_GENERATION", "dotnet.gc.heap.generation", Stable),
    Entry::value(
        "DOTNET_GC_HEAP_GENERATION_VALUE_GEN0",
        "dotnet.gc.heap.generation",
        "gen0",
        Stable,
    ),
    Entry::value(
        "DOTNET_GC_HEAP_GENERATION_VALUE_GEN1",
        "dotnet.gc.heap.generation",
        "gen1",
        Stable,
    ),
    Entry::value(
        "DOTNET_GC_HEAP_GENERATION_VALUE_GEN2",
        "dotnet.gc.heap.generation",
        "gen2",
        Stable,
    ),
    Entry::value("DOTNET_GC_HEAP_GENERATION_VALUE_LOH", "dotnet.gc.heap.generation", "loh", Stable),
    Entry::value("DOTNET_GC_HEAP_GENERATION_VALUE_POH", "dotnet.gc.heap.generation", "poh", Stable),
    Entry::attribute("GO_MEMORY_TYPE", "go.memory.type", Experimental),
    Entry::value("GO_MEMORY_TYPE_VALUE_STACK", "go.memory.type", "stack", Experimental),
    Entry::value("GO_MEMORY_TYPE_VALUE_OTHER", "go.memory.type", "other", Experimental),
    Entry::attribute("JVM_BUFFER_POOL_NAME", "jvm.buffer.pool.name", Experimental),
    Entry::attribute("JVM_GC_ACTION", "jvm.gc.action", Stable),
    Entry::attribute("JVM_GC_CAUSE", "jvm.gc.cause", Experimental),
    Entry::attribute("JVM_GC_NAME", "jvm.gc.name", Stable),
    Entry::attribute("JVM_MEMORY_POOL_NAME", "jvm.memory.pool.name", Stable),
    Entry::attribute("JVM_MEMORY_TYPE", "jvm.memory.type", Stable),
    Entry::value("JVM_MEMORY_TYPE_VALUE_HEAP", "jvm.memory.type", "heap", Stable),
    Entry::value("JVM_MEMORY_TYPE_VALUE_NON_HEAP", "jvm.memory.type", "non_heap", Stable),
    Entry::attribute("JVM_THREAD_DAEMON", "jvm.thread.daemon", Stable),
    Entry::attribute("JVM_THREAD_STATE", "jvm.thread.state", Stable),
    Entry::value("JVM_THREAD_STATE_VALUE_NEW", "jvm.thread.state", "new", Stable),
    Entry::value("JVM_THREAD_STATE_VALUE_RUNNABLE", "jvm.thread.state", "runnable", Stable),
    Entry::value("JVM_THREAD_STATE_VALUE_BLOCKED", "jvm.thread.state", "blocked", Stable),
    Entry::value("JVM_THREAD_STATE_VALUE_WAITING", "jvm.thread.state", "waiting", Stable),
    Entry::value(
        "JVM_THREAD_STATE_VALUE_TIMED_WAITING",
        "jvm.thread.state",
        "timed_waiting",
        Stable,
    ),
    Entry::value("JVM_THREAD_STATE_VALUE_TERMINATED", "jvm.thread.state", "terminated", Stable),
    Entry::attribute("NODEJS_EVENTLOOP_STATE", "nodejs.eventloop.state", Experimental),
    Entry::value(
        "NODEJS_EVENTLOOP_STATE_VALUE_ACTIVE",
        "nodejs.eventloop.state",
        "active",
        Experimental,
    ),
    Entry::value(
        "NODEJS_EVENTLOOP_STATE_VALUE_IDLE",
        "nodejs.eventloop.state",
        "idle",
        Experimental,
    ),
    Entry::attribute("V8JS_GC_TYPE", "v8js.gc.type", Experimental),
    Entry::value("V8JS_GC_TYPE_VALUE_MAJOR", "v8js.gc.type", "major", Experimental),
    Entry::value("V8JS_GC_TYPE_VALUE_MINOR", "v8js.gc.type", "minor", Experimental),
    Entry::value("V8JS_GC_TYPE_VALUE_INCREMENTAL", "v8js.gc.type", "incremental", Experimental),
    Entry::value("V8JS_GC_TYPE_VALUE_WEAKCB", "v8js.gc.type", "weakcb", Experimental),
    Entry::attribute("V8JS_HEAP_SPACE_NAME", "v8js.heap.space.name", Experimental),
    Entry::value(
        "V8JS_HEAP_SPACE_NAME_VALUE_NEW_SPACE",
        "v8js.heap.space.name",
        "new_space",
        Experimental,
    ),
    Entry::value(
        "V8JS_HEAP_SPACE_NAME_VALUE_OLD_SPACE",
        "v8js.heap.space.name",
        "old_space",
        Experimental,
    ),
    Entry::value(
        "V8JS_HEAP_SPACE_NAME_VALUE_CODE_SPACE",
        "v8js.heap.space.name",
        "code_space",
        Experimental,
    ),
    Entry::value(
        "V8JS_HEAP_SPACE_NAME_VALUE_MAP_SPACE",
        "v8js.heap.space.name",
        "map_space",
        Experimental,
    ),
    Entry::value(
        "V8JS_HEAP_SPACE_NAME_VALUE_LARGE_OBJECT_SPACE",
        "v8js.heap.space.name",
        "large_object_space",
        Experimental,
    ),
];
