use std::collections::{HashMap, HashSet, LinkedList};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use lazy_static::lazy_static;

use crate::log_file;

///记录需要保存打印的各种信息
///统计运行中的各种事件次数
/// 1. compare数量
/// 2. swap数量
/// 3. push数量
/// 4. pop数量
/// 信息格式: {信息要输出到的文件名}-{信息}
struct ConfigInfo {
    log_dir: Option<PathBuf>,
    src_path: Option<String>,
    file_infos: HashMap<String, LinkedList<String>>, //记录要写入的文件以及要往文件中写入的信息 (默认是append模式)
    times: HashMap<String, u64>,                     //统计各种事件次数
    baned_set: HashSet<String>,
}

impl ConfigInfo {
    pub fn new() -> ConfigInfo {
        ConfigInfo {
            log_dir: None,
            src_path: None,
            file_infos: HashMap::new(),
            times: HashMap::new(),
            baned_set: HashSet::new(),
        }
    }
}

lazy_static! {
    static ref CONFIG_INFO: Mutex<ConfigInfo> = Mutex::new(ConfigInfo::new());
}

const ORDER: [&str; 4] = ["compare", "swap", "push", "pop"];

fn info() -> MutexGuard<'static, ConfigInfo> {
    // a panic while holding the lock leaves plain data behind, keep using it
    CONFIG_INFO.lock().unwrap_or_else(|e| e.into_inner())
}

///init:初始化,可以重复调用
pub fn init() {
    let mut info = info();
    for kind in ORDER.iter() {
        info.times.entry(kind.to_string()).or_insert(0);
    }
}

pub fn set_log_dir<P: AsRef<Path>>(dir: P) {
    info().log_dir = Some(dir.as_ref().to_path_buf());
}

pub fn get_log_dir() -> Option<PathBuf> {
    info().log_dir.clone()
}

pub fn set_file_path(path: &str) {
    info().src_path = Some(path.to_string());
}

pub fn get_file_path() -> Option<String> {
    info().src_path.clone()
}

///记录在ban列表中的文件就不会被打印
pub fn ban(path: &str) {
    info().baned_set.insert(path.to_string());
}

pub fn is_banned(path: &str) -> bool {
    info().baned_set.contains(path)
}

///事件kind发生times次
pub fn count(kind: &str, times: u64) {
    *info().times.entry(kind.to_string()).or_insert(0) += times;
}

///把msg记到file中,dump时写出
pub fn note(file: &str, msg: &str) {
    info()
        .file_infos
        .entry(file.to_string())
        .or_insert_with(LinkedList::new)
        .push_back(msg.to_string());
}

///事件kind发生times次,并把msg记到file中
pub fn record(file: &str, kind: &str, times: u64, msg: &str) {
    count(kind, times);
    note(file, msg);
}

pub fn times(kind: &str) -> u64 {
    info().times.get(kind).copied().unwrap_or(0)
}

///把信息打印出来,已打印的信息会被清空
pub fn dump() {
    init();
    let (file_infos, mut times, src_path) = {
        let mut info = info();
        let file_infos: Vec<(String, LinkedList<String>)> = info.file_infos.drain().collect();
        let times: Vec<(String, u64)> = info.times.iter().map(|(k, v)| (k.clone(), *v)).collect();
        (file_infos, times, info.src_path.clone())
    };
    for (file, infos) in file_infos.iter() {
        for msg in infos.iter() {
            log_file!(file, "{}", msg);
        }
    }

    //统计的总属性输出到一个专门的文件中
    log_file!(
        "performance_eval.txt",
        "src_path:{}",
        src_path.unwrap_or_else(|| "-".to_string())
    );
    times.sort_by_key(|(kind, _)| {
        let rank = ORDER.iter().position(|k| *k == kind.as_str()).unwrap_or(ORDER.len());
        (rank, kind.clone())
    });
    for (kind, n) in times.iter() {
        log_file!("performance_eval.txt", "{}\t:{} times", kind, n);
    }
}
